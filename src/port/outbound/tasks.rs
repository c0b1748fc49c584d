//! Task tracker port.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{CompletedItem, Task};
use crate::error::Result;

/// Read access to a task tracker.
///
/// Implementations report any failed read as
/// [`Error::Upstream`](crate::error::Error::Upstream) so the report job can
/// mark the run as failed without aborting the process.
#[async_trait]
pub trait TaskSource: Send + Sync {
    /// Return the provider name for logging.
    fn name(&self) -> &'static str;

    /// All currently open tasks.
    async fn active_tasks(&self) -> Result<Vec<Task>>;

    /// Tasks completed at or after `since`, at most `limit` of them.
    async fn completed_since(&self, since: DateTime<Utc>, limit: u32)
        -> Result<Vec<CompletedItem>>;
}
