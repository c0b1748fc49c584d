//! Trailing lookback window.

use chrono::{DateTime, Days, Duration, NaiveDate, SecondsFormat, Utc};

/// Default number of days covered by the report.
pub const DEFAULT_LOOKBACK_DAYS: u32 = 14;

/// Longest lookback a window will cover.
pub const MAX_LOOKBACK_DAYS: u32 = 366;

/// A trailing window of calendar days ending at the invocation date.
///
/// `start` and `end` are UTC calendar dates and both are inclusive, so a
/// 14-day lookback covers 15 days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookbackWindow {
    since: DateTime<Utc>,
    start: NaiveDate,
    end: NaiveDate,
}

impl LookbackWindow {
    /// Build the window ending at `now`.
    ///
    /// `days` is capped at [`MAX_LOOKBACK_DAYS`]. Near the edges of the
    /// representable calendar the window is clamped instead of overflowing.
    #[must_use]
    pub fn ending_at(now: DateTime<Utc>, days: u32) -> Self {
        let days = days.min(MAX_LOOKBACK_DAYS);
        let today = now.date_naive();
        Self {
            since: now
                .checked_sub_signed(Duration::days(i64::from(days)))
                .unwrap_or(DateTime::<Utc>::MIN_UTC),
            start: today
                .checked_sub_days(Days::new(u64::from(days)))
                .unwrap_or(NaiveDate::MIN),
            end: today,
        }
    }

    /// The instant passed to the completed-task query.
    #[must_use]
    pub const fn since(&self) -> DateTime<Utc> {
        self.since
    }

    /// `since` in the encoding the task tracker expects.
    #[must_use]
    pub fn since_param(&self) -> String {
        self.since.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether `day` falls inside the window.
    #[must_use]
    pub fn contains(&self, day: NaiveDate) -> bool {
        day >= self.start && day <= self.end
    }

    /// Every day in the window, oldest first.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        usize::try_from((self.end - self.start).num_days() + 1).unwrap_or(0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 14, 9, 30, 0).unwrap()
    }

    #[test]
    fn default_window_spans_fifteen_inclusive_days() {
        let window = LookbackWindow::ending_at(now(), DEFAULT_LOOKBACK_DAYS);
        assert_eq!(window.start(), NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
        assert_eq!(window.end(), NaiveDate::from_ymd_opt(2024, 1, 14).unwrap());
        assert_eq!(window.len(), 15);
        assert_eq!(window.days().count(), 15);
    }

    #[test]
    fn days_are_chronological_and_bounded() {
        let window = LookbackWindow::ending_at(now(), 3);
        let days: Vec<_> = window.days().map(|d| d.to_string()).collect();
        assert_eq!(
            days,
            vec!["2024-01-11", "2024-01-12", "2024-01-13", "2024-01-14"]
        );
    }

    #[test]
    fn zero_day_window_is_just_today() {
        let window = LookbackWindow::ending_at(now(), 0);
        assert_eq!(window.len(), 1);
        assert!(window.contains(now().date_naive()));
    }

    #[test]
    fn contains_is_inclusive_at_both_ends() {
        let window = LookbackWindow::ending_at(now(), DEFAULT_LOOKBACK_DAYS);
        assert!(window.contains(window.start()));
        assert!(window.contains(window.end()));
        assert!(!window.contains(window.start().pred_opt().unwrap()));
        assert!(!window.contains(window.end().succ_opt().unwrap()));
    }

    #[test]
    fn since_keeps_time_of_day() {
        let window = LookbackWindow::ending_at(now(), DEFAULT_LOOKBACK_DAYS);
        assert_eq!(window.since_param(), "2023-12-31T09:30:00.000Z");
    }

    #[test]
    fn oversized_lookback_is_capped() {
        let window = LookbackWindow::ending_at(now(), u32::MAX);
        assert_eq!(window.len(), MAX_LOOKBACK_DAYS as usize + 1);
        assert_eq!(window.since(), now() - Duration::days(i64::from(MAX_LOOKBACK_DAYS)));
    }

    #[test]
    fn window_at_calendar_floor_does_not_overflow() {
        let window = LookbackWindow::ending_at(DateTime::<Utc>::MIN_UTC, DEFAULT_LOOKBACK_DAYS);
        assert_eq!(window.start(), NaiveDate::MIN);
        assert_eq!(window.since(), DateTime::<Utc>::MIN_UTC);
        assert_eq!(window.len(), 1);
    }

    #[test]
    fn window_crosses_month_boundary() {
        let now = Utc.with_ymd_and_hms(2024, 3, 2, 0, 0, 0).unwrap();
        let window = LookbackWindow::ending_at(now, DEFAULT_LOOKBACK_DAYS);
        assert_eq!(window.start(), NaiveDate::from_ymd_opt(2024, 2, 17).unwrap());
        assert!(window.contains(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()));
    }
}
