//! Configuration and delivery check handlers.

use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::{load_config, output};
use crate::error::Result;
use crate::infrastructure::bootstrap::{build_http_client, build_telegram_notifier};
use crate::infrastructure::config::settings::{mask_secret, TELEGRAM_BOT_TOKEN, TODOIST_API_KEY};
use crate::port::outbound::notifier::Notifier;

const TEST_MESSAGE: &str = "taskpulse test message: delivery is working";

/// Validate configuration and required secrets without contacting any API.
pub fn execute_config(path: Option<&Path>) -> Result<()> {
    let config = load_config(path)?;
    let todoist_present = config.todoist.api_key.is_some();
    let telegram_present = config.telegram.bot_token.is_some();

    if output::is_json() {
        output::json_output(json!({
            "command": "check.config",
            "valid": true,
            "ready": config.credentials().is_ok(),
            "todoist_token_present": todoist_present,
            "telegram_token_present": telegram_present,
            "chat_id": config.telegram.chat_id,
        }));
        return config.credentials().map(|_| ());
    }

    output::section("Configuration Check");
    output::success("Configuration file is valid");

    if todoist_present {
        output::success("Todoist token detected");
    } else {
        output::warning(&format!("{TODOIST_API_KEY} is not set"));
    }
    if telegram_present {
        output::success("Telegram bot token detected");
    } else {
        output::warning(&format!("{TELEGRAM_BOT_TOKEN} is not set"));
    }
    output::field("Chat ID", &config.telegram.chat_id);

    config.credentials()?;
    output::success("Configuration check complete");
    Ok(())
}

/// Test Telegram delivery by sending a test message.
pub async fn execute_telegram(path: Option<&Path>) -> Result<()> {
    let config = load_config(path)?;
    let client = build_http_client(&config)?;
    let notifier = build_telegram_notifier(&config, client)?;
    let masked_token = mask_secret(config.telegram_token()?);

    if !output::is_json() {
        output::section("Telegram Check");
        output::field("Bot token", &masked_token);
        output::field("Chat ID", notifier.chat_id());
    }

    notifier.send(TEST_MESSAGE).await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "check.telegram",
            "masked_token": masked_token,
            "chat_id": notifier.chat_id(),
            "status": "sent",
        }));
        return Ok(());
    }

    output::action_done("Sent", "Telegram test message");
    output::hint("check Telegram for the message");
    Ok(())
}
