//! Tracing setup.
//!
//! Logs go to a daily-rolling file under the signon home directory because
//! stdout belongs to the terminal UI. The filter comes from `SIGNON_LOG`
//! (standard `EnvFilter` syntax), defaulting to `info`.

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::paths;

/// Environment variable controlling the log filter.
pub const LOG_ENV_VAR: &str = "SIGNON_LOG";

/// Initializes the global tracing subscriber.
///
/// The returned guard must be held for the lifetime of the process;
/// dropping it flushes and stops the background writer.
///
/// # Errors
///
/// Returns an error if the log directory cannot be created or a
/// subscriber is already installed.
pub fn init() -> Result<WorkerGuard> {
    let logs_dir = paths::logs_dir();
    std::fs::create_dir_all(&logs_dir)
        .with_context(|| format!("Failed to create {}", logs_dir.display()))?;

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "signon.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))?;

    Ok(guard)
}
