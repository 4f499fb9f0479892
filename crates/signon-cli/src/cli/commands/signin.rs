//! Interactive sign-in command.

use anyhow::Result;
use signon_core::config::Config;
use tracing::info;

pub async fn run(config: &Config, email_prefill: Option<String>) -> Result<()> {
    info!(base_url = %config.base_url, "starting interactive sign-in");

    match signon_tui::run_sign_in(config, email_prefill).await? {
        Some(session) => {
            // Terminal is restored at this point; report on stdout.
            println!("{}", session.message);
            if let Some(token) = session.token {
                println!("Token: {token}");
            }
        }
        None => {
            println!("Sign-in cancelled.");
        }
    }
    Ok(())
}
