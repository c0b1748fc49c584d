//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::{load_config, output, resolve_config_path};
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::settings::{mask_secret, TELEGRAM_BOT_TOKEN, TODOIST_API_KEY};

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../../../config.toml.example");

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, CONFIG_TEMPLATE)?;
    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Edit {} with your settings", path.display()));
    output::note("2. Set TODOIST_API_KEY and TELEGRAM_BOT_TOKEN");
    output::note(&format!("3. Run: taskpulse check config -c {}", path.display()));
    output::note(&format!("4. Run: taskpulse run --dry-run -c {}", path.display()));
    Ok(())
}

/// Execute `config show`.
pub fn execute_show(path: Option<&Path>) -> Result<()> {
    let config = load_config(path)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "config.show",
            "config": serde_json::to_value(&config)?,
        }));
        return Ok(());
    }

    output::section("Effective Configuration");
    match resolve_config_path(path) {
        Some(path) => output::field("Path", path.display()),
        None => output::field("Path", "(built-in defaults)"),
    }
    output::field("Schedule", &config.schedule.cron);
    output::field("Lookback", format!("{} days", config.report.lookback_days));

    output::section("Todoist");
    output::field("REST", &config.todoist.rest_url);
    output::field("Sync", &config.todoist.sync_url);
    output::field("Limit", config.todoist.completed_limit);
    match config.todoist.api_key.as_deref() {
        Some(key) => output::field("Token", mask_secret(key)),
        None => output::warning(&format!("{TODOIST_API_KEY} not set")),
    }

    output::section("Telegram");
    output::field("API", &config.telegram.api_url);
    output::field("Chat ID", &config.telegram.chat_id);
    match config.telegram.bot_token.as_deref() {
        Some(token) => output::field("Bot token", mask_secret(token)),
        None => output::warning(&format!("{TELEGRAM_BOT_TOKEN} not set")),
    }

    output::section("Chart");
    output::field("Base URL", &config.chart.base_url);

    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(path: Option<&Path>) -> Result<()> {
    output::section("Config Validation");
    if let Some(path) = resolve_config_path(path) {
        output::field("Path", path.display());
    }
    load_config(path)?;
    output::success("Config file is valid");
    output::hint("secrets are checked by `taskpulse check config`");
    Ok(())
}
