//! Taskpulse - scheduled Todoist burn-up reports delivered to Telegram.
//!
//! Each invocation reads the active and recently completed tasks from
//! Todoist, buckets them per day over a trailing window, renders the
//! cumulative created/completed curves as a chart link, and posts that link
//! to a Telegram chat.
//!
//! # Architecture
//!
//! The crate follows a ports-and-adapters layout:
//!
//! - [`domain`] - Pure types and logic: tasks, lookback window, daily buckets,
//!   cumulative series, chart description
//! - [`port`] - Traits the application depends on (`TaskSource`, `ChartLink`,
//!   `Notifier`)
//! - [`adapter`] - Todoist, QuickChart and Telegram clients plus the CLI
//! - [`application`] - The report job and its per-invocation runner
//! - [`infrastructure`] - Configuration and runtime wiring
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use chrono::Utc;
//! use taskpulse::application::report::Trigger;
//! use taskpulse::infrastructure::bootstrap::build_report_job;
//! use taskpulse::infrastructure::config::settings::Config;
//!
//! # async fn run() -> taskpulse::error::Result<()> {
//! let config = Config::load("config.toml")?;
//! let job = build_report_job(&config, false)?;
//! let invocation = job.invoke(&Trigger::new("0 9 * * 1"), Utc::now()).await?;
//! println!("{}", invocation.status);
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
