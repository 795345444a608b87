//! In-memory frame sink for assertions.

use std::io;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use bytes::Bytes;
use hybi_core::FrameSink;
use tracing::trace;

#[derive(Debug, Default)]
struct Inner {
    frames: Vec<Bytes>,
    fail: Option<io::ErrorKind>,
}

/// Sink that records every frame buffer it is handed.
///
/// Clones share state: hand one clone to the sender under test and keep
/// another for assertions. Writes can be switched to fail for
/// transport-error tests.
#[derive(Debug, Clone, Default)]
pub struct CaptureSink {
    inner: Arc<Mutex<Inner>>,
}

impl CaptureSink {
    /// Empty sink accepting writes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of all recorded frames, in write order.
    #[must_use]
    pub fn frames(&self) -> Vec<Bytes> {
        self.lock().frames.clone()
    }

    /// Number of recorded frames.
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.lock().frames.len()
    }

    /// True if nothing was written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().frames.is_empty()
    }

    /// Make subsequent writes fail with `kind`, recording nothing.
    pub fn fail_writes(&self, kind: io::ErrorKind) {
        self.lock().fail = Some(kind);
    }

    /// Make subsequent writes succeed again.
    pub fn allow_writes(&self) {
        self.lock().fail = None;
    }
}

#[async_trait]
impl FrameSink for CaptureSink {
    async fn write_frame(&mut self, frame: Bytes) -> io::Result<()> {
        let mut inner = self.lock();
        if let Some(kind) = inner.fail {
            return Err(io::Error::new(kind, "capture sink failure injected"));
        }
        trace!(len = frame.len(), "captured frame");
        inner.frames.push(frame);
        Ok(())
    }
}
