//! Frame construction and encoding.
//!
//! [`Frame::encode`] is the single path from structured frame to wire bytes.
//! It computes the exact output size up front, writes header, extended
//! length, and masking key in order, then copies the payload (XOR-masking it
//! during the copy when a key is present). Callers get one contiguous buffer
//! they can hand to the transport in a single write; no partial frames are
//! ever produced.

use bytes::{BufMut, Bytes, BytesMut};

use crate::errors::{ProtocolError, Result};
use crate::flags::FrameFlags;
use crate::mask::{self, MaskKey};
use crate::opcodes::Opcode;

/// Payload lengths that fit the 7-bit field directly.
const LEN7_MAX: u64 = 125;
/// Selector for the 16-bit extended length form.
const LEN16_SELECTOR: u8 = 126;
/// Selector for the 64-bit extended length form.
const LEN64_SELECTOR: u8 = 127;
/// Largest length the 16-bit form can carry.
const LEN16_MAX: u64 = 65535;

/// Application payload, typed at the API boundary.
///
/// The original protocol surface accepted "string or buffer" and coerced
/// implicitly; here the distinction is an explicit sum type, normalized to
/// bytes exactly once when the frame is encoded. The variant also fixes the
/// data opcode for the first frame of a message, which is why there is no
/// separate `binary` flag anywhere in the send path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// UTF-8 text, sent with opcode 1.
    Text(String),
    /// Raw bytes, sent with opcode 2.
    Binary(Bytes),
}

impl Payload {
    /// Data opcode for the first frame of a message with this payload.
    #[must_use]
    pub fn opcode(&self) -> Opcode {
        match self {
            Self::Text(_) => Opcode::Text,
            Self::Binary(_) => Opcode::Binary,
        }
    }

    /// Byte length after normalization.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Text(text) => text.len(),
            Self::Binary(bytes) => bytes.len(),
        }
    }

    /// True if the payload carries no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Normalize into raw bytes.
    #[must_use]
    pub fn into_bytes(self) -> Bytes {
        match self {
            Self::Text(text) => Bytes::from(text.into_bytes()),
            Self::Binary(bytes) => bytes,
        }
    }
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<u8>> for Payload {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Binary(Bytes::from(bytes))
    }
}

impl From<Bytes> for Payload {
    fn from(bytes: Bytes) -> Self {
        Self::Binary(bytes)
    }
}

/// One wire-level frame, ready to encode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// FIN and reserved bits.
    pub flags: FrameFlags,
    /// Frame opcode.
    pub opcode: Opcode,
    /// Masking key; payload is XOR-masked on the wire iff present.
    ///
    /// The key is caller-supplied data. It must be freshly drawn for every
    /// frame (reused keys defeat the anti-caching purpose of masking), which
    /// is the job of the sending session's environment.
    pub mask: Option<MaskKey>,
    /// Unmasked payload bytes.
    pub payload: Bytes,
}

impl Frame {
    /// Largest encodable payload.
    ///
    /// The wire format nominally allows 2^63 - 1, but the 64-bit length form
    /// here writes a zero high word followed by a 32-bit big-endian length,
    /// capping frames at `u32::MAX` bytes. Anything larger should be
    /// fragmented by the caller, so the cap is surfaced as an explicit error
    /// rather than lifted.
    pub const MAX_PAYLOAD: u64 = u32::MAX as u64;

    /// A final, unmasked frame. The common case for server-to-client data.
    #[must_use]
    pub fn new(opcode: Opcode, payload: Bytes) -> Self {
        Self { flags: FrameFlags::FIN, opcode, mask: None, payload }
    }

    /// Header length for this frame: base header plus extended length field
    /// plus masking key.
    #[must_use]
    pub fn header_len(&self) -> usize {
        let len = self.payload.len() as u64;
        let extended = if len > LEN16_MAX {
            8
        } else if len > LEN7_MAX {
            2
        } else {
            0
        };
        2 + extended + if self.mask.is_some() { 4 } else { 0 }
    }

    /// Encode into one contiguous wire buffer.
    ///
    /// # Errors
    ///
    /// `PayloadTooLarge` if the payload exceeds [`Self::MAX_PAYLOAD`]. The
    /// check runs before any allocation, so a failed encode has no effect.
    pub fn encode(&self) -> Result<Bytes> {
        let len = self.payload.len() as u64;
        if len > Self::MAX_PAYLOAD {
            return Err(ProtocolError::PayloadTooLarge { len });
        }

        let mut buf = BytesMut::with_capacity(self.header_len() + self.payload.len());
        buf.put_u8(self.flags.bits() | self.opcode.to_u8());

        let mask_bit = if self.mask.is_some() { 0x80 } else { 0x00 };
        if len > LEN16_MAX {
            buf.put_u8(mask_bit | LEN64_SELECTOR);
            buf.put_u32(0);
            buf.put_u32(len as u32);
        } else if len > LEN7_MAX {
            buf.put_u8(mask_bit | LEN16_SELECTOR);
            buf.put_u16(len as u16);
        } else {
            buf.put_u8(mask_bit | len as u8);
        }

        match self.mask {
            Some(key) => {
                buf.put_slice(&key);
                let payload_at = buf.len();
                buf.put_slice(&self.payload);
                mask::apply_mask(&mut buf[payload_at..], key);
            },
            None => buf.put_slice(&self.payload),
        }

        Ok(buf.freeze())
    }
}
