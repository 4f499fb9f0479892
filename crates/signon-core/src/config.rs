//! Configuration management for signon.
//!
//! Loads configuration from ${SIGNON_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the authentication service.
    pub base_url: String,

    /// Seconds until the "get new code" action is revealed on the code form.
    pub resend_delay_secs: u64,

    /// Timeout for authentication requests in seconds.
    pub request_timeout_secs: u64,
}

impl Config {
    const DEFAULT_BASE_URL: &str = "http://localhost:8080";
    const DEFAULT_RESEND_DELAY_SECS: u64 = 60;
    const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Writes the current configuration to a specific path, creating parent
    /// directories as needed. Used by `config init`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Request timeout as a `Duration`.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            resend_delay_secs: Self::DEFAULT_RESEND_DELAY_SECS,
            request_timeout_secs: Self::DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

pub mod paths {
    //! Path resolution for signon configuration and data directories.
    //!
    //! SIGNON_HOME resolution order:
    //! 1. SIGNON_HOME environment variable (if set)
    //! 2. ~/.config/signon (default)

    use std::path::PathBuf;

    /// Returns the user's home directory, if known.
    pub fn home_dir() -> Option<PathBuf> {
        std::env::var_os("HOME").map(PathBuf::from)
    }

    /// Returns the signon home directory.
    ///
    /// Checks SIGNON_HOME env var first, falls back to ~/.config/signon
    pub fn signon_home() -> PathBuf {
        if let Ok(home) = std::env::var("SIGNON_HOME") {
            return PathBuf::from(home);
        }

        home_dir()
            .map(|h| h.join(".config").join("signon"))
            .unwrap_or_else(|| PathBuf::from(".signon"))
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        signon_home().join("config.toml")
    }

    /// Returns the path to the log directory.
    pub fn logs_dir() -> PathBuf {
        signon_home().join("logs")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        let config = Config::load_from(&config_path).unwrap();

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.resend_delay_secs, 60);
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_load_partial_config_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        std::fs::write(&config_path, "base_url = \"https://auth.example.com\"\n").unwrap();

        let config = Config::load_from(&config_path).unwrap();

        assert_eq!(config.base_url, "https://auth.example.com");
        assert_eq!(config.resend_delay_secs, 60);
    }

    #[test]
    fn test_load_invalid_toml_errors() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        std::fs::write(&config_path, "base_url = [not toml").unwrap();

        assert!(Config::load_from(&config_path).is_err());
    }

    #[test]
    fn test_save_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.resend_delay_secs = 90;
        config.save_to(&config_path).unwrap();

        let loaded = Config::load_from(&config_path).unwrap();
        assert_eq!(loaded.resend_delay_secs, 90);
    }
}
