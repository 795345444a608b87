//! The four public send-side operations.
//!
//! [`Sender`] composes the frame encoder, the fragmentation tracker, and the
//! environment, and writes each resulting frame to its sink. One `Sender`
//! per connection; data sends go through the fragmentation machine, control
//! frames bypass it.

use bytes::Bytes;
use hybi_proto::{CloseReason, Frame, FrameFlags, Opcode, Payload};
use tracing::trace;

use crate::env::{Environment, SystemEnv};
use crate::error::SendError;
use crate::fragment::FragmentTracker;
use crate::sink::FrameSink;

/// Options for [`Sender::send`].
#[derive(Debug, Clone, Copy)]
pub struct SendOptions {
    /// Whether this frame ends the message. Defaults to true.
    pub fin: bool,
    /// Whether to mask the payload. Defaults to false.
    pub mask: bool,
}

impl Default for SendOptions {
    fn default() -> Self {
        Self { fin: true, mask: false }
    }
}

/// Send side of one connection.
///
/// Every operation synchronously builds one complete frame and issues one
/// sink write. Nothing blocks waiting for the peer, and a failed operation
/// writes no bytes. The fragmentation sequence is advanced only after a
/// successful write, so a failed `send` can be observed and the message
/// restarted without corrupted continuation state.
#[derive(Debug)]
pub struct Sender<S, E = SystemEnv> {
    sink: S,
    env: E,
    fragments: FragmentTracker,
}

impl<S> Sender<S> {
    /// Sender over `sink` using the system RNG for mask keys.
    pub fn new(sink: S) -> Self {
        Self::with_env(sink, SystemEnv::new())
    }
}

impl<S, E> Sender<S, E> {
    /// Sender over `sink` with an explicit environment.
    pub fn with_env(sink: S, env: E) -> Self {
        Self { sink, env, fragments: FragmentTracker::new() }
    }

    /// Shared access to the sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consume the sender and return its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<S, E> Sender<S, E>
where
    S: FrameSink,
    E: Environment,
{
    /// Send a data frame.
    ///
    /// The payload kind picks the opcode for the first frame of a message
    /// (text = 1, binary = 2); continuation frames carry opcode 0 regardless
    /// of kind. With `fin = false` the message stays open and the next
    /// `send` continues it.
    ///
    /// # Errors
    ///
    /// `Protocol` if the payload exceeds the encodable limit, `Io` if the
    /// sink write fails. Neither advances the fragmentation sequence.
    pub async fn send(
        &mut self,
        payload: impl Into<Payload>,
        opts: SendOptions,
    ) -> Result<(), SendError> {
        let payload = payload.into();
        let opcode = self.fragments.frame_opcode(payload.opcode());
        let frame = Frame {
            flags: FrameFlags::with_fin(opts.fin),
            opcode,
            mask: if opts.mask { Some(self.env.mask_key()) } else { None },
            payload: payload.into_bytes(),
        };

        self.write(frame).await?;
        self.fragments.advance(opts.fin);
        Ok(())
    }

    /// Send a ping frame. Always final; never touches fragmentation state,
    /// so it may be sent in the middle of a fragmented message.
    ///
    /// # Errors
    ///
    /// `Io` if the sink write fails.
    pub async fn ping(&mut self, data: impl Into<Bytes>, mask: bool) -> Result<(), SendError> {
        self.control(Opcode::Ping, data.into(), mask).await
    }

    /// Send a pong frame. Same rules as [`Sender::ping`].
    ///
    /// # Errors
    ///
    /// `Io` if the sink write fails.
    pub async fn pong(&mut self, data: impl Into<Bytes>, mask: bool) -> Result<(), SendError> {
        self.control(Opcode::Pong, data.into(), mask).await
    }

    /// Send a close frame.
    ///
    /// `Some(code)` is validated against the registered close-code ranges
    /// and rejected before any write; `None` defaults to 1000 (normal
    /// closure) with no validation needed. The payload is the 2-byte
    /// big-endian code followed by the UTF-8 reason. Close frames are
    /// always sent masked; there is no option to disable it.
    ///
    /// # Errors
    ///
    /// `Protocol` for an unregistered code, `Io` if the sink write fails.
    pub async fn close(&mut self, code: Option<u16>, reason: &str) -> Result<(), SendError> {
        let close = match code {
            Some(code) => CloseReason::new(code, reason)?,
            None => CloseReason::normal(reason),
        };
        self.control(Opcode::Close, close.to_payload(), true).await
    }

    /// Build and write a control frame. Control frames are unfragmentable,
    /// so FIN is unconditional and the fragmentation tracker is bypassed.
    async fn control(&mut self, opcode: Opcode, payload: Bytes, mask: bool) -> Result<(), SendError> {
        let frame = Frame {
            flags: FrameFlags::FIN,
            opcode,
            mask: if mask { Some(self.env.mask_key()) } else { None },
            payload,
        };
        self.write(frame).await
    }

    async fn write(&mut self, frame: Frame) -> Result<(), SendError> {
        let wire = frame.encode()?;
        trace!(
            opcode = ?frame.opcode,
            len = frame.payload.len(),
            fin = frame.flags.contains(FrameFlags::FIN),
            masked = frame.mask.is_some(),
            "sending frame"
        );
        self.sink.write_frame(wire).await?;
        Ok(())
    }
}

// The tests for these operations live in `tests/sender.rs`. They depend on
// `hybi-harness`, which links this crate as a library; keeping them out of
// the unit-test build avoids mixing two instances of the crate's traits.
