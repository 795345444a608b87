//! Close status codes and the close frame payload.

use bytes::{BufMut, Bytes, BytesMut};

use crate::errors::{ProtocolError, Result};

/// Normal closure, the default when the caller supplies no code.
pub const NORMAL_CLOSURE: u16 = 1000;

/// Whether `code` may be sent in a close frame.
///
/// Accepts the registered range 1000..=1011 minus 1004 (reserved), 1005 (no
/// status received) and 1006 (abnormal closure) which exist only for
/// reporting and must never appear on the wire, plus the application range
/// 3000..=4999.
#[must_use]
pub fn is_valid_close_code(code: u16) -> bool {
    matches!(code, 1000..=1003 | 1007..=1011 | 3000..=4999)
}

/// Validated close status plus optional human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloseReason {
    /// Close status code, already validated against the registered ranges.
    pub code: u16,
    /// UTF-8 reason text appended after the code. May be empty.
    pub reason: String,
}

impl CloseReason {
    /// Build a close reason, rejecting unregistered codes.
    ///
    /// # Errors
    ///
    /// `InvalidCloseCode` if `code` fails [`is_valid_close_code`].
    pub fn new(code: u16, reason: impl Into<String>) -> Result<Self> {
        if !is_valid_close_code(code) {
            return Err(ProtocolError::InvalidCloseCode { code });
        }
        Ok(Self { code, reason: reason.into() })
    }

    /// Close reason with the default status 1000.
    ///
    /// Used when the caller supplies no code at all; 1000 is known-valid so
    /// no validation runs.
    #[must_use]
    pub fn normal(reason: impl Into<String>) -> Self {
        Self { code: NORMAL_CLOSURE, reason: reason.into() }
    }

    /// Close frame payload: 2-byte big-endian code followed by the reason.
    #[must_use]
    pub fn to_payload(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(2 + self.reason.len());
        buf.put_u16(self.code);
        buf.put_slice(self.reason.as_bytes());
        buf.freeze()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registered_codes_accepted() {
        for code in [1000, 1001, 1002, 1003, 1007, 1008, 1011, 3000, 4999] {
            assert!(is_valid_close_code(code), "code {code} should be valid");
        }
    }

    #[test]
    fn reserved_and_unregistered_codes_rejected() {
        for code in [0, 999, 1004, 1005, 1006, 1012, 2000, 2999, 5000] {
            assert!(!is_valid_close_code(code), "code {code} should be invalid");
        }
    }

    #[test]
    fn new_rejects_invalid_code() {
        let err = CloseReason::new(999, "").unwrap_err();
        assert_eq!(err, ProtocolError::InvalidCloseCode { code: 999 });
    }

    #[test]
    fn payload_is_code_then_reason() {
        let reason = CloseReason::new(1001, "going away").unwrap();
        let payload = reason.to_payload();

        assert_eq!(&payload[..2], &1001u16.to_be_bytes());
        assert_eq!(&payload[2..], b"going away");
    }

    #[test]
    fn default_payload_decodes_to_1000() {
        let payload = CloseReason::normal("").to_payload();
        assert_eq!(payload.len(), 2);
        assert_eq!(u16::from_be_bytes([payload[0], payload[1]]), 1000);
    }
}
