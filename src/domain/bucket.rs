//! Per-day counters over a lookback window.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::series::CumulativeSeries;
use super::window::LookbackWindow;

/// Daily counts keyed by calendar day.
///
/// Every day of the window is present from construction, so days without
/// activity still show up with a count of zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyBuckets {
    counts: BTreeMap<NaiveDate, u32>,
}

impl DailyBuckets {
    /// Create zeroed buckets for every day in `window`.
    #[must_use]
    pub fn for_window(window: &LookbackWindow) -> Self {
        Self {
            counts: window.days().map(|day| (day, 0)).collect(),
        }
    }

    /// Count one event on `day`.
    ///
    /// Returns `false` and leaves the buckets untouched when `day` is not
    /// part of the window.
    pub fn record(&mut self, day: NaiveDate) -> bool {
        match self.counts.get_mut(&day) {
            Some(count) => {
                *count = count.saturating_add(1);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn get(&self, day: NaiveDate) -> Option<u32> {
        self.counts.get(&day).copied()
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate days and counts in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, u32)> + '_ {
        self.counts.iter().map(|(day, count)| (*day, *count))
    }

    /// Convert to running totals in chronological order.
    #[must_use]
    pub fn cumulative(&self) -> CumulativeSeries {
        let mut running = 0u32;
        let (labels, data) = self
            .iter()
            .map(|(day, count)| {
                running = running.saturating_add(count);
                (day.format("%Y-%m-%d").to_string(), running)
            })
            .unzip();
        CumulativeSeries::new(labels, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn window() -> LookbackWindow {
        LookbackWindow::ending_at(Utc.with_ymd_and_hms(2024, 1, 14, 12, 0, 0).unwrap(), 14)
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn every_day_is_present_and_zero() {
        let window = window();
        let buckets = DailyBuckets::for_window(&window);
        assert_eq!(buckets.len(), 15);
        for d in window.days() {
            assert_eq!(buckets.get(d), Some(0), "missing {d}");
        }
        assert_eq!(buckets.total(), 0);
    }

    #[test]
    fn recording_twice_accumulates() {
        let mut buckets = DailyBuckets::for_window(&window());
        assert!(buckets.record(day(5)));
        assert!(buckets.record(day(5)));
        assert_eq!(buckets.get(day(5)), Some(2));
    }

    #[test]
    fn out_of_window_days_are_rejected() {
        let mut buckets = DailyBuckets::for_window(&window());
        assert!(!buckets.record(day(15)));
        assert!(!buckets.record(NaiveDate::from_ymd_opt(2023, 12, 30).unwrap()));
        assert_eq!(buckets.len(), 15);
        assert_eq!(buckets.total(), 0);
    }

    #[test]
    fn cumulative_carries_counts_forward() {
        let mut buckets = DailyBuckets::for_window(&window());
        buckets.record(day(3));
        buckets.record(day(3));
        buckets.record(day(10));

        let series = buckets.cumulative();
        assert_eq!(series.len(), 15);
        assert_eq!(series.labels()[0], "2023-12-31");
        assert_eq!(series.labels()[14], "2024-01-14");

        // 2024-01-03 is index 3.
        assert_eq!(series.data()[2], 0);
        assert_eq!(series.data()[3], 2);
        assert_eq!(series.data()[9], 2);
        assert_eq!(series.data()[10], 3);
        assert_eq!(series.data()[14], 3);
    }

    #[test]
    fn cumulative_of_empty_activity_is_flat_zero() {
        let series = DailyBuckets::for_window(&window()).cumulative();
        assert!(series.data().iter().all(|v| *v == 0));
        assert_eq!(series.labels().len(), series.data().len());
    }
}
