//! Protocol error types.

/// Errors produced while building a frame.
///
/// Every variant is detected before any byte reaches the transport, so a
/// failed operation never leaves a partial frame on the wire.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolError {
    /// Close status code is outside the registered and application ranges.
    #[error("close code {code} is not a valid close status code")]
    InvalidCloseCode {
        /// The rejected code.
        code: u16,
    },

    /// Payload does not fit the extended length field.
    ///
    /// The 64-bit length form writes a zero high word followed by a 32-bit
    /// big-endian length, so payloads above `u32::MAX` bytes are not
    /// representable in this layout.
    #[error("payload of {len} bytes exceeds the 32-bit extended length limit")]
    PayloadTooLarge {
        /// Byte length of the offending payload.
        len: u64,
    },
}

/// Result alias for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;
