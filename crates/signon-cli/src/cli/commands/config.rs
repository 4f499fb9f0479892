//! Config command handlers.

use anyhow::{Context, Result};
use signon_core::config::{Config, paths};

pub fn path() {
    println!("{}", paths::config_path().display());
}

pub fn init() -> Result<()> {
    let config_path = paths::config_path();
    if config_path.exists() {
        println!("Config already exists at {}", config_path.display());
        return Ok(());
    }
    Config::default()
        .save_to(&config_path)
        .with_context(|| format!("init config at {}", config_path.display()))?;
    println!("Created config at {}", config_path.display());
    Ok(())
}
