//! UI event types.
//!
//! All inputs to the TUI (terminal events, async request results, the tick
//! cadence) are converted to `UiEvent` before reaching the reducer. Async
//! handlers send their result events directly to the runtime's inbox.

use crossterm::event::Event as CrosstermEvent;
use signon_core::auth::{AuthError, LoginResponse, VerifyResponse};

use crate::common::RequestId;

/// Unified event enum for the TUI.
#[derive(Debug)]
pub enum UiEvent {
    /// Periodic tick. Drives the spinner, the countdown, and notice expiry.
    Tick,

    /// Raw terminal event (keys, resize).
    Terminal(CrosstermEvent),

    /// Login request finished.
    LoginResult {
        req: RequestId,
        result: Result<LoginResponse, AuthError>,
    },

    /// Verification request finished.
    VerifyResult {
        req: RequestId,
        result: Result<VerifyResponse, AuthError>,
    },
}
