//! CLI module graph.

pub mod check;
pub mod command;
pub mod config;
pub mod output;
pub mod paths;
pub mod run;

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Resolve the config path a command should read.
///
/// An explicit path is always used. Otherwise the default location is used
/// when it exists, and `None` means "built-in defaults".
#[must_use]
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let default = paths::default_config();
            default.exists().then_some(default)
        }
    }
}

/// Load configuration for a command, falling back to defaults.
///
/// # Errors
///
/// Returns an error if an explicit file cannot be read or the configuration
/// does not validate.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match resolve_config_path(explicit) {
        Some(path) => Config::load(path),
        None => Config::parse_toml(""),
    }
}
