//! Report, chart and schedule configuration.

use serde::{Deserialize, Serialize};

use crate::domain::DEFAULT_LOOKBACK_DAYS;

/// What the report covers.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportConfig {
    /// Trailing window length in days (default: 14).
    #[serde(default = "default_lookback_days")]
    pub lookback_days: u32,
}

const fn default_lookback_days() -> u32 {
    DEFAULT_LOOKBACK_DAYS
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            lookback_days: default_lookback_days(),
        }
    }
}

/// Chart rendering service.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChartServiceConfig {
    /// URL prefix the encoded chart JSON is appended to.
    #[serde(default = "default_chart_base_url")]
    pub base_url: String,
}

fn default_chart_base_url() -> String {
    "https://quickchart.io/chart?c=".to_string()
}

impl Default for ChartServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_chart_base_url(),
        }
    }
}

/// Schedule the external timer fires on.
///
/// Only used to label the per-invocation log line; triggering itself is left
/// to cron, a systemd timer, or similar.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScheduleConfig {
    #[serde(default = "default_cron")]
    pub cron: String,
}

fn default_cron() -> String {
    "0 9 * * 1".to_string()
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            cron: default_cron(),
        }
    }
}

/// Outbound HTTP client settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpConfig {
    /// Per-request timeout in seconds (default: 30).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}
