//! Key handling and result handling for the credential form.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};
use signon_core::auth::{AuthError, Credentials, LoginResponse};
use signon_core::validate;
use tracing::info;

use crate::common::RequestId;
use crate::effects::UiEffect;
use crate::features::code::CodeFormState;
use crate::features::login::LoginFormState;
use crate::state::TuiState;

/// Banner shown for any client-side validation failure. Deliberately does
/// not distinguish the failing field.
const INVALID_CREDENTIALS_BANNER: &str = "Invalid Credentials";

/// Handles a key press while the credential form has focus.
pub fn handle_key(login: &mut LoginFormState, tui: &mut TuiState, key: KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            login.toggle_focus();
            vec![]
        }
        KeyCode::Char(c) => {
            login.push_char(c);
            vec![]
        }
        KeyCode::Backspace => {
            login.pop_char();
            vec![]
        }
        KeyCode::Enter => submit(login, tui),
        _ => vec![],
    }
}

/// Attempts to submit the form.
///
/// A no-op while either field is empty or a login request is already in
/// flight. Validation failures surface as the generic banner without a
/// network call.
fn submit(login: &mut LoginFormState, tui: &mut TuiState) -> Vec<UiEffect> {
    if !login.can_submit() || tui.login_request.is_some() {
        return vec![];
    }

    if validate::validate_credentials(&login.email, &login.password).is_err() {
        login.error = Some(INVALID_CREDENTIALS_BANNER.to_string());
        return vec![];
    }

    login.error = None;
    let req = tui.request_seq.next_id();
    tui.login_request = Some(req);
    vec![UiEffect::SubmitLogin {
        req,
        credentials: Credentials {
            email: login.email.clone(),
            password: login.password.clone(),
        },
    }]
}

/// Applies a finished login request.
///
/// Returns the code form to open on success. Stale results (id mismatch)
/// are dropped without touching state.
pub fn handle_login_result(
    login: &mut LoginFormState,
    tui: &mut TuiState,
    req: RequestId,
    result: Result<LoginResponse, AuthError>,
) -> Option<CodeFormState> {
    if tui.login_request != Some(req) {
        return None;
    }
    tui.login_request = None;

    match result {
        Ok(response) => {
            info!("login accepted, entering code verification");
            login.error = None;
            tui.login_token = response.token;
            Some(CodeFormState::new(
                tui.config.resend_delay_secs,
                Instant::now(),
            ))
        }
        Err(e) => {
            login.error = Some(e.message);
            None
        }
    }
}
