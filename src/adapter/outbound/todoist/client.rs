//! HTTP client for the Todoist REST and Sync APIs.

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use super::dto::{decode_each, CompletedResponse};
use crate::domain::{CompletedItem, Task};
use crate::error::{Error, Result, UpstreamSource};
use crate::port::outbound::tasks::TaskSource;

/// Todoist API client.
///
/// Implements [`TaskSource`]. Transport, status and body-level decoding
/// failures are reported as [`Error::Upstream`]. Individual entries that do
/// not decode are skipped with a warning.
#[derive(Clone)]
pub struct TodoistClient {
    /// HTTP client for API requests.
    client: Client,
    /// Bearer token.
    api_key: String,
    /// REST API base, e.g. `https://api.todoist.com/rest/v2`.
    rest_url: String,
    /// Sync API base, e.g. `https://api.todoist.com/sync/v9`.
    sync_url: String,
}

impl std::fmt::Debug for TodoistClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoistClient")
            .field("rest_url", &self.rest_url)
            .field("sync_url", &self.sync_url)
            .finish_non_exhaustive()
    }
}

impl TodoistClient {
    /// Create a client with explicit endpoints.
    #[must_use]
    pub fn new(
        client: Client,
        api_key: impl Into<String>,
        rest_url: impl Into<String>,
        sync_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            rest_url: trim_base(rest_url.into()),
            sync_url: trim_base(sync_url.into()),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        stage: UpstreamSource,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let response = self
            .client
            .get(url)
            .bearer_auth(&self.api_key)
            .header("Content-Type", "application/json")
            .query(query)
            .send()
            .await
            .map_err(|e| upstream(stage, e.to_string()))?;

        let response = check_status(stage, response)?;
        response
            .json::<T>()
            .await
            .map_err(|e| upstream(stage, format!("invalid response body: {e}")))
    }
}

#[async_trait]
impl TaskSource for TodoistClient {
    fn name(&self) -> &'static str {
        "todoist"
    }

    async fn active_tasks(&self) -> Result<Vec<Task>> {
        let url = format!("{}/tasks", self.rest_url);
        let raw: Vec<Value> = self
            .get_json(UpstreamSource::ActiveTasks, &url, &[])
            .await?;
        let total = raw.len();
        let tasks: Vec<Task> = decode_each("active task", raw);
        debug!(count = tasks.len(), total, "Fetched active tasks");
        Ok(tasks)
    }

    async fn completed_since(
        &self,
        since: DateTime<Utc>,
        limit: u32,
    ) -> Result<Vec<CompletedItem>> {
        let url = format!("{}/completed/get_all", self.sync_url);
        let query = [
            ("since", since.to_rfc3339_opts(SecondsFormat::Millis, true)),
            ("limit", limit.to_string()),
        ];
        let response: CompletedResponse = self
            .get_json(UpstreamSource::CompletedTasks, &url, &query)
            .await?;
        let total = response.items.len();
        let items: Vec<CompletedItem> = decode_each("completed task", response.items);
        debug!(count = items.len(), total, "Fetched completed tasks");
        Ok(items)
    }
}

fn check_status(stage: UpstreamSource, response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(upstream(stage, format!("HTTP {}", status.as_u16())))
    }
}

fn upstream(stage: UpstreamSource, reason: String) -> Error {
    Error::Upstream { stage, reason }
}

fn trim_base(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed() {
        let client = TodoistClient::new(
            Client::new(),
            "key",
            "https://api.todoist.com/rest/v2/",
            "https://api.todoist.com/sync/v9//",
        );
        assert_eq!(client.rest_url, "https://api.todoist.com/rest/v2");
        assert_eq!(client.sync_url, "https://api.todoist.com/sync/v9");
    }

    #[test]
    fn client_name() {
        let client = TodoistClient::new(Client::new(), "key", "http://a", "http://b");
        assert_eq!(client.name(), "todoist");
    }

    #[test]
    fn upstream_error_carries_stage() {
        let err = upstream(UpstreamSource::CompletedTasks, "HTTP 401".into());
        assert_eq!(err.to_string(), "failed to fetch completed tasks: HTTP 401");
        assert!(!err.is_fatal());
    }
}
