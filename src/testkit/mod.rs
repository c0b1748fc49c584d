//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`source`] - Scripted [`TaskSource`](crate::port::TaskSource): `StubTaskSource`.
//! - [`notifier`] - Recording [`Notifier`](crate::port::Notifier): `RecordingNotifier`.
//! - [`domain`] - Builders for tasks, completed items and timestamps.
//! - [`logs`] - `CapturedLogs`, a buffer for asserting on `tracing` output.
//! - [`config`] - Canonical test configurations pointed at a local server.

pub mod config;
pub mod domain;
pub mod logs;
pub mod notifier;
pub mod source;

pub use logs::CapturedLogs;
pub use notifier::RecordingNotifier;
pub use source::StubTaskSource;
