//! Infrastructure bootstrap helpers for runtime wiring.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use tracing::info;

use crate::adapter::outbound::log::LogNotifier;
use crate::adapter::outbound::quickchart::QuickChart;
use crate::adapter::outbound::telegram::{TelegramConfig, TelegramNotifier};
use crate::adapter::outbound::todoist::TodoistClient;
use crate::application::report::{JobSettings, ReportJob};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::notifier::Notifier;

/// Build the shared HTTP client with the configured timeout.
///
/// # Errors
///
/// Returns an error if the client cannot be constructed.
pub fn build_http_client(config: &Config) -> Result<Client> {
    Ok(Client::builder()
        .timeout(Duration::from_secs(config.http.timeout_secs))
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()?)
}

/// Build the Telegram notifier from configuration.
///
/// # Errors
///
/// Returns an error if `TELEGRAM_BOT_TOKEN` is missing.
pub fn build_telegram_notifier(config: &Config, client: Client) -> Result<TelegramNotifier> {
    let tg_config = TelegramConfig {
        api_url: config.telegram.api_url.clone(),
        bot_token: config.telegram_token()?.to_string(),
        chat_id: config.telegram.chat_id.clone(),
    };
    Ok(TelegramNotifier::new(client, tg_config))
}

/// Wire the report job from configuration.
///
/// With `dry_run` set, the report is logged instead of sent and no bot token
/// is required.
///
/// # Errors
///
/// Returns an error if a required secret is missing or the HTTP client
/// cannot be built.
pub fn build_report_job(config: &Config, dry_run: bool) -> Result<ReportJob> {
    let client = build_http_client(config)?;

    let source = TodoistClient::new(
        client.clone(),
        config.todoist_token()?,
        &config.todoist.rest_url,
        &config.todoist.sync_url,
    );

    let notifier: Arc<dyn Notifier> = if dry_run {
        info!("Dry-run mode: report will be logged, not sent");
        Arc::new(LogNotifier)
    } else {
        Arc::new(build_telegram_notifier(config, client)?)
    };

    let settings = JobSettings {
        lookback_days: config.report.lookback_days,
        completed_limit: config.todoist.completed_limit,
    };

    Ok(ReportJob::new(
        Arc::new(source),
        Arc::new(QuickChart::new(&config.chart.base_url)),
        notifier,
        settings,
    ))
}
