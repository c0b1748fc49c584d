//! Chart link port.

use crate::domain::ChartConfig;
use crate::error::Result;

/// Turns a chart description into a URL that renders it.
///
/// The rendered image is never fetched; only the link is shared.
pub trait ChartLink: Send + Sync {
    fn link(&self, chart: &ChartConfig) -> Result<String>;
}
