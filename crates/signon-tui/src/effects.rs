//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! The reducer never performs I/O or spawns tasks itself; it mutates state
//! and describes the side effects here.

use signon_core::auth::Credentials;

use crate::common::RequestId;
use crate::state::Session;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Spawn the login request.
    SubmitLogin {
        req: RequestId,
        credentials: Credentials,
    },

    /// Spawn the verification request with the assembled six-digit code.
    SubmitVerify { req: RequestId, code: String },

    /// Sign-in finished: run the session hooks in order and quit.
    CompleteSession { session: Session },
}
