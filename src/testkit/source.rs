//! Scripted task source.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;

use crate::domain::{CompletedItem, Task};
use crate::error::{Error, Result, UpstreamSource};
use crate::port::outbound::tasks::TaskSource;

#[derive(Default)]
struct State {
    tasks: Vec<Task>,
    completed: Vec<CompletedItem>,
    active_failure: Option<String>,
    completed_failure: Option<String>,
    active_calls: usize,
    completed_calls: Vec<(DateTime<Utc>, u32)>,
}

/// In-memory [`TaskSource`] returning canned data or canned failures.
///
/// Clones share state, so a test can keep a handle for assertions after
/// handing one to the job.
#[derive(Clone, Default)]
pub struct StubTaskSource {
    state: Arc<Mutex<State>>,
}

impl StubTaskSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tasks(self, tasks: Vec<Task>) -> Self {
        self.state.lock().tasks = tasks;
        self
    }

    pub fn with_completed(self, completed: Vec<CompletedItem>) -> Self {
        self.state.lock().completed = completed;
        self
    }

    /// Make the active task read fail with `reason`.
    pub fn fail_active(self, reason: &str) -> Self {
        self.state.lock().active_failure = Some(reason.to_string());
        self
    }

    /// Make the completed task read fail with `reason`.
    pub fn fail_completed(self, reason: &str) -> Self {
        self.state.lock().completed_failure = Some(reason.to_string());
        self
    }

    pub fn active_calls(&self) -> usize {
        self.state.lock().active_calls
    }

    /// `(since, limit)` for every completed-task query made so far.
    pub fn completed_calls(&self) -> Vec<(DateTime<Utc>, u32)> {
        self.state.lock().completed_calls.clone()
    }
}

#[async_trait]
impl TaskSource for StubTaskSource {
    fn name(&self) -> &'static str {
        "stub"
    }

    async fn active_tasks(&self) -> Result<Vec<Task>> {
        let mut state = self.state.lock();
        state.active_calls += 1;
        match &state.active_failure {
            Some(reason) => Err(Error::Upstream {
                stage: UpstreamSource::ActiveTasks,
                reason: reason.clone(),
            }),
            None => Ok(state.tasks.clone()),
        }
    }

    async fn completed_since(
        &self,
        since: DateTime<Utc>,
        limit: u32,
    ) -> Result<Vec<CompletedItem>> {
        let mut state = self.state.lock();
        state.completed_calls.push((since, limit));
        match &state.completed_failure {
            Some(reason) => Err(Error::Upstream {
                stage: UpstreamSource::CompletedTasks,
                reason: reason.clone(),
            }),
            None => Ok(state.completed.clone()),
        }
    }
}
