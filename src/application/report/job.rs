//! The four-stage report pipeline.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::domain::{aggregate, report_message, ChartConfig, LookbackWindow, DEFAULT_LOOKBACK_DAYS};
use crate::error::Result;
use crate::port::outbound::chart::ChartLink;
use crate::port::outbound::notifier::Notifier;
use crate::port::outbound::tasks::TaskSource;

/// Tunables for a report run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobSettings {
    /// Trailing window length in days.
    pub lookback_days: u32,
    /// Maximum completed items requested upstream.
    pub completed_limit: u32,
}

impl Default for JobSettings {
    fn default() -> Self {
        Self {
            lookback_days: DEFAULT_LOOKBACK_DAYS,
            completed_limit: 200,
        }
    }
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub window: LookbackWindow,
    pub chart: ChartConfig,
    pub chart_url: String,
    pub message: String,
    pub created_total: u32,
    pub completed_total: u32,
    pub older: usize,
    pub outside_window: usize,
}

/// Fetches task activity, charts it and delivers the link.
///
/// Stages run strictly in order and each one starts only after the previous
/// one succeeded.
pub struct ReportJob {
    source: Arc<dyn TaskSource>,
    chart: Arc<dyn ChartLink>,
    notifier: Arc<dyn Notifier>,
    settings: JobSettings,
}

impl ReportJob {
    #[must_use]
    pub fn new(
        source: Arc<dyn TaskSource>,
        chart: Arc<dyn ChartLink>,
        notifier: Arc<dyn Notifier>,
        settings: JobSettings,
    ) -> Self {
        Self {
            source,
            chart,
            notifier,
            settings,
        }
    }

    #[must_use]
    pub const fn settings(&self) -> JobSettings {
        self.settings
    }

    /// Run the whole pipeline for the window ending at `now`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Upstream`](crate::error::Error::Upstream) if either
    /// read fails, in which case nothing is sent, and
    /// [`Error::Delivery`](crate::error::Error::Delivery) if the message
    /// could not be delivered.
    pub async fn run(&self, now: DateTime<Utc>) -> Result<Report> {
        let report = self.prepare(now).await?;
        self.notifier.send(&report.message).await?;
        info!(
            notifier = self.notifier.name(),
            created = report.created_total,
            completed = report.completed_total,
            "Report delivered"
        );
        Ok(report)
    }

    /// Run the fetch, aggregate and chart stages without delivering.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Upstream`](crate::error::Error::Upstream) if either
    /// read fails.
    pub async fn prepare(&self, now: DateTime<Utc>) -> Result<Report> {
        let window = LookbackWindow::ending_at(now, self.settings.lookback_days);

        let tasks = self.source.active_tasks().await?;
        let completed = self
            .source
            .completed_since(window.since(), self.settings.completed_limit)
            .await?;
        debug!(
            source = self.source.name(),
            active = tasks.len(),
            completed = completed.len(),
            since = %window.since_param(),
            "Fetched task activity"
        );

        let activity = aggregate(&window, &tasks, &completed);
        let created = activity.created_series();
        let done = activity.completed_series();
        debug!(
            older = activity.older,
            outside_window = activity.outside_window,
            days = created.len(),
            "Aggregated daily activity"
        );

        let chart = ChartConfig::created_vs_completed(&created, &done);
        let chart_url = self.chart.link(&chart)?;
        let message = report_message(&chart_url);

        Ok(Report {
            window,
            chart,
            chart_url,
            message,
            created_total: created.last(),
            completed_total: done.last(),
            older: activity.older,
            outside_window: activity.outside_window,
        })
    }
}
