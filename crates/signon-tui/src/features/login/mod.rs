//! Credential form: email and password entry, submission, result handling.

mod render;
mod state;
mod update;

pub use render::render_login;
pub use state::{LoginField, LoginFormState};
pub use update::{handle_key, handle_login_result};
