//! Chartable running-total series.

use serde::Serialize;

/// Day labels paired with running totals.
///
/// `labels` and `data` always have the same length and share the same
/// chronological order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CumulativeSeries {
    labels: Vec<String>,
    data: Vec<u32>,
}

impl CumulativeSeries {
    pub(crate) fn new(labels: Vec<String>, data: Vec<u32>) -> Self {
        debug_assert_eq!(labels.len(), data.len());
        Self { labels, data }
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn data(&self) -> &[u32] {
        &self.data
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The final running total, or zero for an empty series.
    #[must_use]
    pub fn last(&self) -> u32 {
        self.data.last().copied().unwrap_or(0)
    }

    /// Whether every value is at least the one before it.
    #[must_use]
    pub fn is_monotonic(&self) -> bool {
        self.data.windows(2).all(|pair| pair[0] <= pair[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_of_empty_series_is_zero() {
        assert_eq!(CumulativeSeries::default().last(), 0);
        assert!(CumulativeSeries::default().is_empty());
    }

    #[test]
    fn monotonic_check() {
        let ok = CumulativeSeries::new(vec!["a".into(), "b".into()], vec![1, 1]);
        let bad = CumulativeSeries::new(vec!["a".into(), "b".into()], vec![2, 1]);
        assert!(ok.is_monotonic());
        assert!(!bad.is_monotonic());
    }
}
