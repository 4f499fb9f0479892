//! Application state composition.
//!
//! State is split between `TuiState` (cross-view concerns: quit flag, config,
//! request tracking, notices) and the two form states. The code-entry form is
//! stored as `Option<CodeFormState>`: `Some` means the second-factor step is
//! active and rendered over the credential form. This split lets form
//! handlers take `&mut` to their own form and to `TuiState` simultaneously.

use std::time::{Duration, Instant};

use signon_core::config::Config;

use crate::common::{RequestId, RequestSeq};
use crate::features::code::CodeFormState;
use crate::features::login::LoginFormState;

/// How long a transient notice stays on screen.
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

/// Combined application state for the TUI.
pub struct AppState {
    pub tui: TuiState,
    /// Credential form. Retains its contents while the code form is open.
    pub login: LoginFormState,
    /// Code-entry form, present after a successful login.
    pub code: Option<CodeFormState>,
}

impl AppState {
    pub fn new(config: Config, email_prefill: Option<String>) -> Self {
        Self {
            tui: TuiState::new(config),
            login: LoginFormState::new(email_prefill),
            code: None,
        }
    }
}

/// Cross-view TUI state.
pub struct TuiState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// Loaded configuration (endpoint base, countdown delay).
    pub config: Config,
    /// Request id sequence for async operations.
    pub request_seq: RequestSeq,
    /// Latest issued login request, if still in flight.
    pub login_request: Option<RequestId>,
    /// Latest issued verification request, if still in flight.
    pub verify_request: Option<RequestId>,
    /// Token returned by the last successful login, carried into the session.
    pub login_token: Option<String>,
    /// Transient notice shown at the bottom of the screen.
    pub notice: Option<Notice>,
    /// Spinner animation frame counter (advanced on Tick).
    pub spinner_frame: usize,
    /// Completed session, set just before quitting.
    pub session: Option<Session>,
}

impl TuiState {
    pub fn new(config: Config) -> Self {
        Self {
            should_quit: false,
            config,
            request_seq: RequestSeq::default(),
            login_request: None,
            verify_request: None,
            login_token: None,
            notice: None,
            spinner_frame: 0,
            session: None,
        }
    }

    /// Returns true if any network request is in flight.
    pub fn request_in_flight(&self) -> bool {
        self.login_request.is_some() || self.verify_request.is_some()
    }

    /// Posts a transient notice, replacing any current one.
    pub fn post_notice(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice {
            text: text.into(),
            expires_at: Instant::now() + NOTICE_TTL,
        });
    }

    /// Clears the notice once its lifetime has elapsed.
    pub fn expire_notice(&mut self, now: Instant) {
        if self.notice.as_ref().is_some_and(|n| now >= n.expires_at) {
            self.notice = None;
        }
    }
}

/// A short-lived message shown at the bottom of the screen.
pub struct Notice {
    pub text: String,
    pub expires_at: Instant,
}

/// Outcome of a completed sign-in flow.
#[derive(Debug, Clone)]
pub struct Session {
    /// Token from the login response, if the server issued one.
    pub token: Option<String>,
    /// Server message from the verification response.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_expiry() {
        let mut tui = TuiState::new(Config::default());
        tui.post_notice("hello");

        tui.expire_notice(Instant::now());
        assert!(tui.notice.is_some());

        tui.expire_notice(Instant::now() + NOTICE_TTL + Duration::from_millis(1));
        assert!(tui.notice.is_none());
    }
}
