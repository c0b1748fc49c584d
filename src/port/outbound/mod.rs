//! Outbound ports (driven side): interfaces implemented by outbound adapters.

pub mod chart;
pub mod notifier;
pub mod tasks;
