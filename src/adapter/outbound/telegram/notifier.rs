//! Telegram Bot API notifier.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::info;

use crate::error::{Error, Result};
use crate::port::outbound::notifier::Notifier;

/// Connection settings for the Telegram notifier.
#[derive(Clone)]
pub struct TelegramConfig {
    /// Bot API base URL, usually `https://api.telegram.org`.
    pub api_url: String,
    /// Bot API token obtained from BotFather.
    pub bot_token: String,
    /// Target chat ID for reports. Group chats are negative.
    pub chat_id: String,
}

impl std::fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("api_url", &self.api_url)
            .field("bot_token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .finish()
    }
}

#[derive(Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Telegram notifier that posts messages to a single chat.
#[derive(Debug, Clone)]
pub struct TelegramNotifier {
    client: Client,
    config: TelegramConfig,
}

impl TelegramNotifier {
    #[must_use]
    pub fn new(client: Client, config: TelegramConfig) -> Self {
        Self { client, config }
    }

    #[must_use]
    pub fn chat_id(&self) -> &str {
        &self.config.chat_id
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/bot{}/sendMessage",
            self.config.api_url.trim_end_matches('/'),
            self.config.bot_token
        )
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    fn name(&self) -> &'static str {
        "telegram"
    }

    async fn send(&self, text: &str) -> Result<()> {
        let body = SendMessage {
            chat_id: &self.config.chat_id,
            text,
        };

        // The token is part of the URL, so transport errors are stripped of it.
        let response = self
            .client
            .post(self.endpoint())
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Delivery {
                reason: e.without_url().to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Delivery {
                reason: format!("HTTP {}", status.as_u16()),
            });
        }

        info!(chat_id = %self.config.chat_id, "Telegram message sent");
        Ok(())
    }
}
