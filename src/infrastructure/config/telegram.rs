//! Telegram delivery configuration.

use serde::{Deserialize, Serialize};

/// Telegram Bot API settings.
///
/// The bot token comes from `TELEGRAM_BOT_TOKEN`; the chat can be overridden
/// with `TELEGRAM_CHAT_ID`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TelegramAppConfig {
    /// Bot API base URL.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Destination chat for the report.
    #[serde(default = "default_chat_id")]
    pub chat_id: String,
    /// Bot token, populated from `TELEGRAM_BOT_TOKEN`.
    #[serde(skip)]
    pub bot_token: Option<String>,
}

fn default_api_url() -> String {
    "https://api.telegram.org".to_string()
}

fn default_chat_id() -> String {
    "-555189625".to_string()
}

impl Default for TelegramAppConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            chat_id: default_chat_id(),
            bot_token: None,
        }
    }
}
