//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file with environment variable overrides
//! for the two API secrets, which are never read from the file.
//!
//! # Example
//!
//! ```no_run
//! use taskpulse::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use super::logging::LoggingConfig;
use super::report::{ChartServiceConfig, HttpConfig, ReportConfig, ScheduleConfig};
use super::telegram::TelegramAppConfig;
use super::todoist::TodoistConfig;
use crate::domain::MAX_LOOKBACK_DAYS;
use crate::error::{ConfigError, Result};

/// Environment variable holding the Todoist API token.
pub const TODOIST_API_KEY: &str = "TODOIST_API_KEY";
/// Environment variable holding the Telegram bot token.
pub const TELEGRAM_BOT_TOKEN: &str = "TELEGRAM_BOT_TOKEN";
/// Optional environment override for the destination chat.
pub const TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";

/// Main application configuration.
///
/// Every section is optional in the TOML file and falls back to defaults,
/// so an empty file is a valid configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Schedule label used in the invocation log line.
    #[serde(default)]
    pub schedule: ScheduleConfig,

    /// Report window settings.
    #[serde(default)]
    pub report: ReportConfig,

    /// Task tracker endpoints and limits.
    #[serde(default)]
    pub todoist: TodoistConfig,

    /// Message delivery settings.
    #[serde(default)]
    pub telegram: TelegramAppConfig,

    /// Chart rendering service.
    #[serde(default)]
    pub chart: ChartServiceConfig,

    /// Outbound HTTP client settings.
    #[serde(default)]
    pub http: HttpConfig,
}

/// API secrets required to run a report.
#[derive(Clone)]
pub struct Credentials {
    pub todoist_token: String,
    pub telegram_token: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("todoist_token", &mask_secret(&self.todoist_token))
            .field("telegram_token", &mask_secret(&self.telegram_token))
            .finish()
    }
}

impl Config {
    /// Parse configuration from TOML content, reading secrets from the
    /// process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        Self::parse_toml_with_env(content, |key| std::env::var(key).ok())
    }

    /// Parse configuration from TOML content with an explicit environment
    /// lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml_with_env<F>(content: &str, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_env(env);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Fill secrets and overrides from the environment.
    ///
    /// Empty values are treated as unset.
    pub fn apply_env<F>(&mut self, env: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| {
            env(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        self.todoist.api_key = non_empty(TODOIST_API_KEY);
        self.telegram.bot_token = non_empty(TELEGRAM_BOT_TOKEN);
        if let Some(chat_id) = non_empty(TELEGRAM_CHAT_ID) {
            self.telegram.chat_id = chat_id;
        }
    }

    /// Validate configuration values.
    ///
    /// Secrets are not checked here; see [`Config::credentials`].
    fn validate(&self) -> Result<()> {
        validate_url("todoist.rest_url", &self.todoist.rest_url)?;
        validate_url("todoist.sync_url", &self.todoist.sync_url)?;
        validate_url("telegram.api_url", &self.telegram.api_url)?;
        validate_url("chart.base_url", &self.chart.base_url)?;

        if self.todoist.completed_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "completed_limit",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.report.lookback_days == 0 {
            return Err(ConfigError::InvalidValue {
                field: "lookback_days",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.report.lookback_days > MAX_LOOKBACK_DAYS {
            return Err(ConfigError::InvalidValue {
                field: "lookback_days",
                reason: format!("must be at most {MAX_LOOKBACK_DAYS}"),
            }
            .into());
        }
        if self.http.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.telegram.chat_id.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "chat_id" }.into());
        }
        if self.schedule.cron.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "cron" }.into());
        }

        Ok(())
    }

    /// Return both API secrets.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] naming the first unset variable.
    pub fn credentials(&self) -> Result<Credentials> {
        Ok(Credentials {
            todoist_token: self.todoist_token()?.to_string(),
            telegram_token: self.telegram_token()?.to_string(),
        })
    }

    /// The Todoist token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] when `TODOIST_API_KEY` is unset.
    pub fn todoist_token(&self) -> Result<&str> {
        self.todoist.api_key.as_deref().ok_or_else(|| {
            ConfigError::MissingField {
                field: TODOIST_API_KEY,
            }
            .into()
        })
    }

    /// The Telegram bot token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] when `TELEGRAM_BOT_TOKEN` is unset.
    pub fn telegram_token(&self) -> Result<&str> {
        self.telegram.bot_token.as_deref().ok_or_else(|| {
            ConfigError::MissingField {
                field: TELEGRAM_BOT_TOKEN,
            }
            .into()
        })
    }

    /// Initialize logging based on configuration.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

fn validate_url(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ConfigError::MissingField { field }.into());
    }
    let url = Url::parse(value).map_err(|e| ConfigError::InvalidValue {
        field,
        reason: e.to_string(),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidValue {
            field,
            reason: format!("unsupported scheme '{}'", url.scheme()),
        }
        .into());
    }
    Ok(())
}

/// Mask a secret for display, keeping a short prefix and suffix.
#[must_use]
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}
