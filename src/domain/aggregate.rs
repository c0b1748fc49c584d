//! Bucketing of task activity into daily counts.

use super::bucket::DailyBuckets;
use super::series::CumulativeSeries;
use super::task::{CompletedItem, Task};
use super::window::LookbackWindow;

/// Daily task activity over a lookback window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    /// Active tasks created per day.
    pub created: DailyBuckets,
    /// Tasks completed per day.
    pub completed: DailyBuckets,
    /// Active tasks created before the window started.
    pub older: usize,
    /// Records whose day fell after the window (or, for completions, before
    /// it) and were therefore not binned.
    pub outside_window: usize,
}

impl Activity {
    #[must_use]
    pub fn created_series(&self) -> CumulativeSeries {
        self.created.cumulative()
    }

    #[must_use]
    pub fn completed_series(&self) -> CumulativeSeries {
        self.completed.cumulative()
    }
}

/// Bucket active tasks by creation day and completed items by completion
/// day.
///
/// A task counts as "older" when its creation day is before the window
/// start. A task created on the start day is inside the window.
#[must_use]
pub fn aggregate(
    window: &LookbackWindow,
    tasks: &[Task],
    completed: &[CompletedItem],
) -> Activity {
    let mut activity = Activity {
        created: DailyBuckets::for_window(window),
        completed: DailyBuckets::for_window(window),
        older: 0,
        outside_window: 0,
    };

    for task in tasks {
        let day = task.created_at.date_naive();
        if day < window.start() {
            activity.older += 1;
        } else if !activity.created.record(day) {
            activity.outside_window += 1;
        }
    }

    for item in completed {
        if !activity.completed.record(item.completed_at.date_naive()) {
            activity.outside_window += 1;
        }
    }

    activity
}
