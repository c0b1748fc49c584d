//! Recording notifier.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::error::{Error, Result};
use crate::port::outbound::notifier::Notifier;

/// Thread-safe message collector for delivery assertions in tests.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    messages: Arc<Mutex<Vec<String>>>,
    failure: Option<String>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A notifier whose every send fails with `reason`.
    pub fn failing(reason: &str) -> Self {
        Self {
            messages: Arc::default(),
            failure: Some(reason.to_string()),
        }
    }

    /// Messages accepted so far.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.messages.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn send(&self, text: &str) -> Result<()> {
        if let Some(reason) = &self.failure {
            return Err(Error::Delivery {
                reason: reason.clone(),
            });
        }
        self.messages.lock().push(text.to_string());
        Ok(())
    }
}
