//! Six-digit code entry: segmented slots, countdown, verification.

mod render;
mod state;
mod update;

pub use render::render_code;
pub use state::{CodeFormState, Countdown};
pub use update::{CodeKeyOutcome, handle_key, handle_verify_result};
