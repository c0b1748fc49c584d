//! QuickChart link builder.
//!
//! QuickChart renders a Chart.js configuration passed in the `c` query
//! parameter, so a chart is fully described by its URL.

use crate::domain::ChartConfig;
use crate::error::Result;
use crate::port::outbound::chart::ChartLink;

/// Default QuickChart endpoint, ending in the chart parameter.
pub const DEFAULT_BASE_URL: &str = "https://quickchart.io/chart?c=";

#[derive(Debug, Clone)]
pub struct QuickChart {
    base_url: String,
}

impl QuickChart {
    /// `base_url` must end where the encoded chart JSON starts, e.g.
    /// `https://quickchart.io/chart?c=`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for QuickChart {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ChartLink for QuickChart {
    fn link(&self, chart: &ChartConfig) -> Result<String> {
        let json = serde_json::to_string(chart)?;
        Ok(format!("{}{}", self.base_url, urlencoding::encode(&json)))
    }
}
