//! Notifier port for report delivery.

use async_trait::async_trait;

use crate::error::Result;

/// Sends a text message to a fixed destination.
///
/// Unlike the task source, a failed send is returned as
/// [`Error::Delivery`](crate::error::Error::Delivery) and is fatal for the
/// invocation.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Return the channel name for logging.
    fn name(&self) -> &'static str;

    /// Deliver `text` and wait for the remote side to accept it.
    async fn send(&self, text: &str) -> Result<()>;
}
