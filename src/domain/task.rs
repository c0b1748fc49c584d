//! Task records returned by the task tracker.
//!
//! Only the fields the report needs are modeled. Unknown fields in the
//! upstream JSON are ignored.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

/// An active (not yet completed) task.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Task {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub content: String,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Task {
    #[must_use]
    pub fn new(id: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            content: String::new(),
            created_at,
        }
    }
}

/// A task closed within the lookback window.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CompletedItem {
    #[serde(default, deserialize_with = "deserialize_id")]
    pub task_id: String,
    #[serde(default)]
    pub content: String,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub completed_at: DateTime<Utc>,
}

impl CompletedItem {
    #[must_use]
    pub fn new(task_id: impl Into<String>, completed_at: DateTime<Utc>) -> Self {
        Self {
            task_id: task_id.into(),
            content: String::new(),
            completed_at,
        }
    }
}

/// Parse an upstream timestamp into UTC.
///
/// Accepts RFC 3339, a naive `YYYY-MM-DDTHH:MM:SS[.f]` timestamp (taken as
/// UTC), or a bare `YYYY-MM-DD` date (midnight UTC).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp '{raw}'")))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

// Older API versions return numeric ids.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Number(id) => id.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone, Timelike};

    #[test]
    fn parses_rfc3339_with_fraction() {
        let ts = parse_timestamp("2019-12-11T22:36:50.000000Z").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2019, 12, 11, 22, 36, 50).unwrap());
    }

    #[test]
    fn parses_rfc3339_with_offset_into_utc() {
        let ts = parse_timestamp("2024-01-02T01:30:00+02:00").unwrap();
        assert_eq!(ts.day(), 1);
        assert_eq!(ts.hour(), 23);
    }

    #[test]
    fn parses_naive_timestamp_as_utc() {
        let ts = parse_timestamp("2024-03-05T10:00:00").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 3, 5, 10, 0, 0).unwrap());
    }

    #[test]
    fn parses_bare_date_as_midnight() {
        let ts = parse_timestamp("2024-01-01").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("").is_none());
    }

    #[test]
    fn task_deserializes_and_ignores_extra_fields() {
        let json = r#"{
            "id": "2995104339",
            "content": "Buy Milk",
            "project_id": "2203306141",
            "is_completed": false,
            "created_at": "2019-12-11T22:36:50.000000Z"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, "2995104339");
        assert_eq!(task.content, "Buy Milk");
        assert_eq!(task.created_at.year(), 2019);
    }

    #[test]
    fn task_accepts_numeric_id() {
        let json = r#"{"id": 42, "created_at": "2024-01-01"}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, "42");
        assert!(task.content.is_empty());
    }

    #[test]
    fn task_without_created_at_is_rejected() {
        let json = r#"{"id": "1", "content": "x"}"#;
        assert!(serde_json::from_str::<Task>(json).is_err());
    }

    #[test]
    fn completed_item_deserializes_minimal_shape() {
        let json = r#"{"completed_at": "2015-02-17T15:40:41.000000Z"}"#;
        let item: CompletedItem = serde_json::from_str(json).unwrap();
        assert!(item.task_id.is_empty());
        assert_eq!(item.completed_at.month(), 2);
    }
}
