//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use signon_core::config::Config;

mod commands;

#[derive(Parser)]
#[command(name = "signon")]
#[command(version = "0.1")]
#[command(about = "Terminal sign-in client with one-time-code verification")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override the authentication service base URL
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Prefill the email field
    #[arg(long, value_name = "EMAIL")]
    email: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },

        // default to the interactive sign-in flow
        None => {
            let mut config = Config::load().context("load config")?;
            if let Some(base_url) = cli.base_url {
                config.base_url = base_url;
            }
            let _guard = signon_core::logging::init().context("init logging")?;
            commands::signin::run(&config, cli.email).await
        }
    }
}
