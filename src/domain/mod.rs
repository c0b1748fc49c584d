//! Report domain: tasks, windows, daily buckets and charts.
//!
//! Nothing here performs I/O. Adapters turn upstream responses into
//! [`Task`] and [`CompletedItem`] values, and the report job feeds them
//! through [`aggregate`] to produce the chart payload.

pub mod aggregate;
pub mod bucket;
pub mod chart;
pub mod series;
pub mod task;
pub mod window;

pub use aggregate::{aggregate, Activity};
pub use bucket::DailyBuckets;
pub use chart::{report_message, ChartConfig, REPORT_TITLE};
pub use series::CumulativeSeries;
pub use task::{CompletedItem, Task};
pub use window::{LookbackWindow, DEFAULT_LOOKBACK_DAYS, MAX_LOOKBACK_DAYS};
