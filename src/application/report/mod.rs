//! Report use case: fetch, aggregate, chart, deliver.

mod job;
mod runner;

pub use job::{JobSettings, Report, ReportJob};
pub use runner::{Invocation, RunStatus, Trigger};
