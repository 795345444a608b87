//! Transport sink abstraction.
//!
//! The sender hands complete frame buffers to a [`FrameSink`]; everything
//! about the transport (TCP, TLS, a capture buffer in tests) hides behind
//! it. Write errors pass through untouched: this core does not interpret,
//! retry, or recover from transport failures. That is connection-layer
//! policy.

use std::io;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Destination for fully built frames.
#[async_trait]
pub trait FrameSink: Send {
    /// Write one complete frame buffer.
    ///
    /// The buffer is a single self-describing frame; implementations must
    /// not split or reorder it relative to other frames on the same sink.
    async fn write_frame(&mut self, frame: Bytes) -> io::Result<()>;
}

/// Adapter from any async byte stream to a [`FrameSink`].
///
/// Wraps a tokio write half (a TCP stream, a TLS stream, a simulated
/// socket) and writes each frame with one `write_all` followed by a flush.
#[derive(Debug)]
pub struct StreamSink<W> {
    stream: W,
}

impl<W> StreamSink<W> {
    /// Wrap a write half.
    pub fn new(stream: W) -> Self {
        Self { stream }
    }

    /// Consume the adapter and return the underlying stream.
    pub fn into_inner(self) -> W {
        self.stream
    }
}

#[async_trait]
impl<W> FrameSink for StreamSink<W>
where
    W: AsyncWrite + Unpin + Send,
{
    async fn write_frame(&mut self, frame: Bytes) -> io::Result<()> {
        self.stream.write_all(&frame).await?;
        self.stream.flush().await
    }
}
