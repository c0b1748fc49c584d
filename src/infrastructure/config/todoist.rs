//! Todoist API configuration.

use serde::{Deserialize, Serialize};

/// Todoist API settings.
///
/// The bearer token is never read from the config file. It is loaded from
/// the `TODOIST_API_KEY` environment variable at startup.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TodoistConfig {
    /// Base URL of the REST API serving active tasks.
    #[serde(default = "default_rest_url")]
    pub rest_url: String,
    /// Base URL of the Sync API serving completed task history.
    #[serde(default = "default_sync_url")]
    pub sync_url: String,
    /// Maximum completed items requested (default: 200).
    #[serde(default = "default_completed_limit")]
    pub completed_limit: u32,
    /// API token, populated from `TODOIST_API_KEY`.
    #[serde(skip)]
    pub api_key: Option<String>,
}

fn default_rest_url() -> String {
    "https://api.todoist.com/rest/v2".to_string()
}

fn default_sync_url() -> String {
    "https://api.todoist.com/sync/v9".to_string()
}

const fn default_completed_limit() -> u32 {
    200
}

impl Default for TodoistConfig {
    fn default() -> Self {
        Self {
            rest_url: default_rest_url(),
            sync_url: default_sync_url(),
            completed_limit: default_completed_limit(),
            api_key: None,
        }
    }
}
