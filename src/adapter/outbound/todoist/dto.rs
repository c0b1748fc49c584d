//! Wire types for Todoist responses.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

/// Body of `GET /completed/get_all`.
///
/// Items stay raw so one bad entry does not sink the whole page.
#[derive(Debug, Deserialize)]
pub(super) struct CompletedResponse {
    #[serde(default)]
    pub items: Vec<Value>,
}

/// Decode each element on its own, dropping the ones that do not fit `T`.
pub(super) fn decode_each<T: DeserializeOwned>(kind: &'static str, raw: Vec<Value>) -> Vec<T> {
    raw.into_iter()
        .filter_map(|value| {
            let id = value.get("id").cloned().unwrap_or(Value::Null);
            match serde_json::from_value(value) {
                Ok(item) => Some(item),
                Err(e) => {
                    warn!(kind, id = %id, error = %e, "Skipping undecodable entry");
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CompletedItem, Task};
    use serde_json::json;

    #[test]
    fn parses_completed_response() {
        let json = r#"{
            "items": [
                {
                    "content": "Buy Milk",
                    "meta_data": null,
                    "user_id": "2671355",
                    "task_id": "2995104339",
                    "note_count": 0,
                    "project_id": "2203306141",
                    "section_id": "7025",
                    "completed_at": "2015-02-17T15:40:41.000000Z",
                    "id": "1899066186"
                }
            ],
            "projects": {},
            "sections": {}
        }"#;
        let response: CompletedResponse = serde_json::from_str(json).unwrap();
        let items: Vec<CompletedItem> = decode_each("completed task", response.items);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].task_id, "2995104339");
    }

    #[test]
    fn missing_items_is_empty() {
        let response: CompletedResponse = serde_json::from_str("{}").unwrap();
        assert!(response.items.is_empty());
    }

    #[test]
    fn bad_timestamp_drops_only_that_task() {
        let raw = vec![
            json!({ "id": "1", "content": "ok", "created_at": "2024-01-10T12:00:00Z" }),
            json!({ "id": "2", "content": "bad", "created_at": "yesterday" }),
        ];

        let tasks: Vec<Task> = decode_each("active task", raw);

        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, "1");
    }
}
