//! Notifier that writes messages to the log instead of sending them.
//!
//! Used for dry runs.

use async_trait::async_trait;
use tracing::info;

use crate::error::Result;
use crate::port::outbound::notifier::Notifier;

#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    fn name(&self) -> &'static str {
        "log"
    }

    async fn send(&self, text: &str) -> Result<()> {
        info!(text = %text, "Report message (dry run, not sent)");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn log_notifier_always_succeeds() {
        let notifier = LogNotifier;
        assert_eq!(notifier.name(), "log");
        assert!(notifier.send("hello").await.is_ok());
    }
}
