//! Canonical test configurations.
//!
//! Single source of truth for config structs used across tests. Every
//! endpoint points at one local server so a single mock can answer all
//! three calls.

use crate::infrastructure::config::settings::{Config, TELEGRAM_BOT_TOKEN, TODOIST_API_KEY};

/// Token the test configuration authenticates to Todoist with.
pub const TODOIST_TOKEN: &str = "test-todoist-token";
/// Bot token the test configuration posts with.
pub const BOT_TOKEN: &str = "123456:test-bot-token";
/// Chat the test configuration delivers to.
pub const CHAT_ID: &str = "-100200300";

/// Configuration with every external endpoint rooted at `base_url`.
///
/// Todoist REST lives under `/rest/v2`, Sync under `/sync/v9`, the bot API
/// at the root and charts under `/chart?c=`.
pub fn pointed_at(base_url: &str) -> Config {
    let base = base_url.trim_end_matches('/');
    let toml = format!(
        r#"
[schedule]
cron = "0 9 * * 1"

[todoist]
rest_url = "{base}/rest/v2"
sync_url = "{base}/sync/v9"

[telegram]
api_url = "{base}"
chat_id = "{CHAT_ID}"

[chart]
base_url = "{base}/chart?c="

[http]
timeout_secs = 5
"#
    );
    Config::parse_toml_with_env(&toml, |key| match key {
        TODOIST_API_KEY => Some(TODOIST_TOKEN.to_string()),
        TELEGRAM_BOT_TOKEN => Some(BOT_TOKEN.to_string()),
        _ => None,
    })
    .expect("test config should be valid")
}
