//! Path utilities for taskpulse.
//!
//! All data lives under `~/.taskpulse/`:
//! - `~/.taskpulse/config.toml` - main configuration

use std::path::PathBuf;

/// Returns the taskpulse home directory (`~/.taskpulse/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".taskpulse")
}

/// Returns the default config file path (`~/.taskpulse/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}
