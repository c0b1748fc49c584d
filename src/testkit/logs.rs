//! In-memory log capture for asserting on emitted `tracing` events.

use std::io;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::Subscriber;
use tracing_subscriber::fmt;

/// Shared buffer that a test subscriber writes formatted events into.
///
/// Install with `tracing::subscriber::set_default(logs.subscriber())` in a
/// single-threaded test; events are rendered without ANSI colors.
#[derive(Clone, Default)]
pub struct CapturedLogs {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    pub fn new() -> Self {
        Self::default()
    }

    /// A subscriber recording `INFO` and above into this buffer.
    pub fn subscriber(&self) -> impl Subscriber + Send + Sync {
        let writer = self.clone();
        fmt()
            .with_ansi(false)
            .with_max_level(tracing::Level::INFO)
            .with_writer(move || writer.clone())
            .finish()
    }

    /// Every captured line, oldest first.
    pub fn lines(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.buf.lock())
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.lock().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
