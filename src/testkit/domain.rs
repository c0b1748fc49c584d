//! Builders for domain primitives used in tests.

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::{CompletedItem, Task};

/// Noon UTC on the given date.
pub fn noon(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0)
        .single()
        .expect("valid test date")
}

/// An active task created at noon on the given date.
pub fn task_created(year: i32, month: u32, day: u32) -> Task {
    Task::new(format!("task-{year}{month:02}{day:02}"), noon(year, month, day))
}

/// A completed item closed at noon on the given date.
pub fn completed_on(year: i32, month: u32, day: u32) -> CompletedItem {
    CompletedItem::new(format!("done-{year}{month:02}{day:02}"), noon(year, month, day))
}
