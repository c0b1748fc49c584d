//! Infrastructure configuration modules.

pub mod logging;
pub mod report;
pub mod settings;
pub mod telegram;
pub mod todoist;
