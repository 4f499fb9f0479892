//! Full-screen TUI for the signon flow.
//!
//! Elm-style architecture: a pure reducer (`update`) over `AppState`
//! producing `UiEffect`s, executed by `TuiRuntime` which owns the terminal
//! and the async inbox.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stderr};

use anyhow::Result;
pub use runtime::{SessionHooks, TuiRuntime};
use signon_core::config::Config;
pub use state::Session;

/// Runs the interactive sign-in flow.
///
/// Returns the completed session, or `None` if the user quit before
/// verifying a code.
pub async fn run_sign_in(config: &Config, email_prefill: Option<String>) -> Result<Option<Session>> {
    if !stderr().is_terminal() {
        anyhow::bail!("Interactive sign-in requires a terminal.");
    }

    let mut runtime = TuiRuntime::new(config.clone(), email_prefill)?;
    runtime.run()?;
    Ok(runtime.take_session())
}
