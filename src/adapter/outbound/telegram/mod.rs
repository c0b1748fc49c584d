//! Telegram report delivery.
//!
//! Provides the [`TelegramNotifier`] for posting report messages through the
//! Bot API `sendMessage` method.

mod notifier;

pub use notifier::{TelegramConfig, TelegramNotifier};
