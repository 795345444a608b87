//! Test-only frame inspector.
//!
//! The production crates deliberately contain no frame parser; receive-side
//! decoding is out of their scope. Oracle assertions still need to look
//! inside encoded frames, so this module carries a minimal inspector that
//! understands exactly what the encoder emits. It is test tooling, not a
//! protocol implementation: no validation beyond structural completeness.

use hybi_proto::{MaskKey, apply_mask};

/// Decoded view of one encoded frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameView {
    /// FIN bit.
    pub fin: bool,
    /// The three RSV bits, as a nibble-aligned value (0 for this core).
    pub rsv: u8,
    /// Raw 4-bit opcode.
    pub opcode: u8,
    /// MASK bit.
    pub masked: bool,
    /// Masking key, when the MASK bit is set.
    pub mask_key: Option<MaskKey>,
    /// Payload bytes, unmasked if a key was present.
    pub payload: Vec<u8>,
    /// Total encoded size of this frame, for walking concatenated frames.
    pub wire_len: usize,
}

impl FrameView {
    /// Parse one frame from the start of `bytes`.
    ///
    /// Returns `None` if the buffer is too short to hold the frame its
    /// header describes.
    #[must_use]
    pub fn parse(bytes: &[u8]) -> Option<Self> {
        let first = *bytes.first()?;
        let second = *bytes.get(1)?;

        let masked = second & 0x80 != 0;
        let (len, mut offset) = match second & 0x7F {
            126 => {
                let len = u16::from_be_bytes([*bytes.get(2)?, *bytes.get(3)?]);
                (u64::from(len), 4)
            },
            127 => {
                let mut field = [0u8; 8];
                field.copy_from_slice(bytes.get(2..10)?);
                (u64::from_be_bytes(field), 10)
            },
            len7 => (u64::from(len7), 2),
        };

        let mask_key = if masked {
            let mut key = [0u8; 4];
            key.copy_from_slice(bytes.get(offset..offset + 4)?);
            offset += 4;
            Some(key)
        } else {
            None
        };

        let len = usize::try_from(len).ok()?;
        let mut payload = bytes.get(offset..offset + len)?.to_vec();
        if let Some(key) = mask_key {
            apply_mask(&mut payload, key);
        }

        Some(Self {
            fin: first & 0x80 != 0,
            rsv: first & 0x70,
            opcode: first & 0x0F,
            masked,
            mask_key,
            payload,
            wire_len: offset + len,
        })
    }

    /// Parse a buffer of back-to-back frames.
    ///
    /// Returns `None` if any frame is incomplete or trailing bytes remain.
    #[must_use]
    pub fn parse_all(mut bytes: &[u8]) -> Option<Vec<Self>> {
        let mut frames = Vec::new();
        while !bytes.is_empty() {
            let frame = Self::parse(bytes)?;
            bytes = &bytes[frame.wire_len..];
            frames.push(frame);
        }
        Some(frames)
    }

    /// Big-endian close code from the first two payload bytes.
    #[must_use]
    pub fn close_code(&self) -> Option<u16> {
        let bytes = self.payload.get(..2)?;
        Some(u16::from_be_bytes([bytes[0], bytes[1]]))
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use hybi_proto::{Frame, FrameFlags, Opcode};

    use super::*;

    #[test]
    fn inspects_unmasked_text_frame() {
        let wire = Frame::new(Opcode::Text, Bytes::from_static(b"hi")).encode().unwrap();
        let view = FrameView::parse(&wire).unwrap();

        assert!(view.fin);
        assert_eq!(view.rsv, 0);
        assert_eq!(view.opcode, 0x1);
        assert!(!view.masked);
        assert_eq!(view.payload, b"hi");
        assert_eq!(view.wire_len, wire.len());
    }

    #[test]
    fn unmasks_payload_with_transmitted_key() {
        let frame = Frame {
            flags: FrameFlags::FIN,
            opcode: Opcode::Binary,
            mask: Some([9, 8, 7, 6]),
            payload: Bytes::from_static(b"opaque"),
        };
        let view = FrameView::parse(&frame.encode().unwrap()).unwrap();

        assert!(view.masked);
        assert_eq!(view.mask_key, Some([9, 8, 7, 6]));
        assert_eq!(view.payload, b"opaque");
    }

    #[test]
    fn walks_concatenated_frames() {
        let mut wire = Frame::new(Opcode::Text, Bytes::from_static(b"one")).encode().unwrap().to_vec();
        wire.extend_from_slice(&Frame::new(Opcode::Ping, Bytes::new()).encode().unwrap());

        let frames = FrameView::parse_all(&wire).unwrap();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].opcode, 0x1);
        assert_eq!(frames[1].opcode, 0x9);
    }

    #[test]
    fn truncated_frame_is_rejected() {
        let wire = Frame::new(Opcode::Text, Bytes::from_static(b"hello")).encode().unwrap();
        assert!(FrameView::parse(&wire[..wire.len() - 1]).is_none());
        assert!(FrameView::parse(&[]).is_none());
    }
}
