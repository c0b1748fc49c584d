//! Invocation wrapper: runs the job once and records the outcome line.

use std::fmt;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use super::job::{Report, ReportJob};
use crate::error::Result;

/// The external timer event that started this invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trigger {
    /// Cron expression of the schedule that fired.
    pub cron: String,
    /// Nominal fire time, if the scheduler reported one.
    pub scheduled_at: Option<DateTime<Utc>>,
}

impl Trigger {
    #[must_use]
    pub fn new(cron: impl Into<String>) -> Self {
        Self {
            cron: cron.into(),
            scheduled_at: None,
        }
    }
}

/// Binary outcome recorded for every invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Success,
    Fail,
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Fail => write!(f, "fail"),
        }
    }
}

/// Result of one invocation that did not hit a fatal error.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub status: RunStatus,
    /// Present when the report was built (and, unless dry-run, delivered).
    pub report: Option<Report>,
}

impl Invocation {
    /// The per-invocation log line.
    #[must_use]
    pub fn log_line(&self, trigger: &Trigger) -> String {
        format!("trigger fired at {}: {}", trigger.cron, self.status)
    }
}

impl ReportJob {
    /// Run one invocation and emit the outcome line.
    ///
    /// Upstream read failures end the run with [`RunStatus::Fail`]. Fatal
    /// errors, such as a rejected message, are returned and no outcome line
    /// is written.
    ///
    /// # Errors
    ///
    /// Returns any error for which [`Error::is_fatal`](crate::error::Error::is_fatal)
    /// holds.
    pub async fn invoke(&self, trigger: &Trigger, now: DateTime<Utc>) -> Result<Invocation> {
        finish(trigger, self.run(now).await)
    }

    /// Like [`ReportJob::invoke`], but builds the report without delivering it.
    ///
    /// # Errors
    ///
    /// Returns any fatal error raised while building the report.
    pub async fn invoke_dry_run(
        &self,
        trigger: &Trigger,
        now: DateTime<Utc>,
    ) -> Result<Invocation> {
        finish(trigger, self.prepare(now).await)
    }
}

fn finish(trigger: &Trigger, outcome: Result<Report>) -> Result<Invocation> {
    let invocation = match outcome {
        Ok(report) => Invocation {
            status: RunStatus::Success,
            report: Some(report),
        },
        Err(e) if !e.is_fatal() => {
            warn!(error = %e, "Report aborted");
            Invocation {
                status: RunStatus::Fail,
                report: None,
            }
        }
        Err(e) => return Err(e),
    };

    info!(
        cron = %trigger.cron,
        scheduled_at = ?trigger.scheduled_at,
        status = %invocation.status,
        "{}",
        invocation.log_line(trigger)
    );
    Ok(invocation)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::adapter::outbound::quickchart::QuickChart;
    use crate::application::report::JobSettings;
    use crate::domain::Task;
    use crate::error::Error;
    use crate::testkit::{CapturedLogs, RecordingNotifier, StubTaskSource};
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 14, 9, 0, 0).unwrap()
    }

    fn job(source: StubTaskSource, notifier: RecordingNotifier) -> ReportJob {
        ReportJob::new(
            Arc::new(source),
            Arc::new(QuickChart::default()),
            Arc::new(notifier),
            JobSettings::default(),
        )
    }

    #[test]
    fn status_display() {
        assert_eq!(RunStatus::Success.to_string(), "success");
        assert_eq!(RunStatus::Fail.to_string(), "fail");
    }

    #[tokio::test]
    async fn successful_invocation_logs_success() {
        let trigger = Trigger::new("0 9 * * 1");
        let invocation = job(StubTaskSource::new(), RecordingNotifier::new())
            .invoke(&trigger, now())
            .await
            .unwrap();
        assert_eq!(invocation.status, RunStatus::Success);
        assert_eq!(invocation.log_line(&trigger), "trigger fired at 0 9 * * 1: success");
    }

    #[tokio::test]
    async fn outcome_line_carries_schedule_and_fire_time() {
        let logs = CapturedLogs::new();
        let _guard = tracing::subscriber::set_default(logs.subscriber());

        let mut trigger = Trigger::new("0 9 * * 1");
        trigger.scheduled_at = Some(now());
        job(StubTaskSource::new(), RecordingNotifier::new())
            .invoke(&trigger, now())
            .await
            .unwrap();

        let line = logs
            .lines()
            .into_iter()
            .find(|line| line.contains("trigger fired at 0 9 * * 1: success"))
            .expect("outcome line logged");
        assert!(line.contains("scheduled_at=Some(2024-01-14T09:00:00"), "{line}");
        assert!(line.contains("status=success"), "{line}");
    }

    #[tokio::test]
    async fn outcome_line_without_fire_time_records_none() {
        let logs = CapturedLogs::new();
        let _guard = tracing::subscriber::set_default(logs.subscriber());

        job(StubTaskSource::new().fail_active("HTTP 500"), RecordingNotifier::new())
            .invoke(&Trigger::new("*/5 * * * *"), now())
            .await
            .unwrap();

        assert!(logs
            .lines()
            .iter()
            .any(|line| line.contains("trigger fired at */5 * * * *: fail")
                && line.contains("scheduled_at=None")));
    }

    #[tokio::test]
    async fn upstream_failure_is_a_failed_run_not_an_error() {
        let trigger = Trigger::new("*/5 * * * *");
        let notifier = RecordingNotifier::new();
        let invocation = job(StubTaskSource::new().fail_active("HTTP 500"), notifier.clone())
            .invoke(&trigger, now())
            .await
            .unwrap();
        assert_eq!(invocation.status, RunStatus::Fail);
        assert!(invocation.report.is_none());
        assert_eq!(invocation.log_line(&trigger), "trigger fired at */5 * * * *: fail");
        assert!(notifier.is_empty());
    }

    #[tokio::test]
    async fn delivery_failure_propagates() {
        let trigger = Trigger::new("0 9 * * 1");
        let source = StubTaskSource::new().with_tasks(vec![Task::new("1", now())]);
        let result = job(source, RecordingNotifier::failing("HTTP 403"))
            .invoke(&trigger, now())
            .await;
        assert!(matches!(result, Err(Error::Delivery { .. })));
    }

    #[tokio::test]
    async fn dry_run_builds_report_without_sending() {
        let trigger = Trigger::new("0 9 * * 1");
        let notifier = RecordingNotifier::new();
        let invocation = job(StubTaskSource::new(), notifier.clone())
            .invoke_dry_run(&trigger, now())
            .await
            .unwrap();
        assert_eq!(invocation.status, RunStatus::Success);
        assert!(invocation.report.is_some());
        assert!(notifier.is_empty());
    }
}
