//! Shared fixtures for integration tests.

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use serde_json::{json, Value};

/// Fixed "now" all flow tests run at: Sunday 2024-01-14 09:00 UTC.
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 14, 9, 0, 0).unwrap()
}

/// Active task payload as the REST API returns it.
pub fn active_task(id: &str, created_at: &str) -> Value {
    json!({
        "id": id,
        "content": format!("task {id}"),
        "project_id": "2203306141",
        "is_completed": false,
        "created_at": created_at,
    })
}

/// Completed item payload as the Sync API returns it.
pub fn completed_item(task_id: &str, completed_at: &str) -> Value {
    json!({
        "id": format!("c{task_id}"),
        "task_id": task_id,
        "content": format!("task {task_id}"),
        "completed_at": completed_at,
        "project_id": "2203306141",
    })
}

/// Sync API envelope around completed items.
pub fn completed_envelope(items: Vec<Value>) -> Value {
    json!({ "items": items, "projects": {}, "sections": {} })
}
