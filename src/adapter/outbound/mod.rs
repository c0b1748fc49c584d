//! Outbound adapters (driven side).

pub mod log;
pub mod quickchart;
pub mod telegram;
pub mod todoist;
