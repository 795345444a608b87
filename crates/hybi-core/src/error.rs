//! Send error types.

use hybi_proto::ProtocolError;

/// Failure of one send-side operation.
///
/// `Protocol` failures happen before any byte is written. `Io` failures come
/// straight from the transport and are forwarded to the caller, who owns
/// recovery and teardown policy.
#[derive(Debug, thiserror::Error)]
pub enum SendError {
    /// Frame could not be built (invalid close code, oversized payload).
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// Transport write failed.
    #[error("transport write failed: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protocol_error_message_passes_through() {
        let err = SendError::from(ProtocolError::InvalidCloseCode { code: 999 });
        assert_eq!(err.to_string(), "close code 999 is not a valid close status code");
    }

    #[test]
    fn io_error_is_wrapped() {
        let err = SendError::from(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "peer gone"));
        assert!(matches!(err, SendError::Io(_)));
        assert!(err.to_string().contains("peer gone"));
    }
}
