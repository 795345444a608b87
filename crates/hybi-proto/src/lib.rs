//! Wire format for the HyBi WebSocket framing protocol, send side.
//!
//! A frame is a 2-byte base header, an optional extended length field, an
//! optional 4-byte masking key, and the payload. The encoder in [`frame`]
//! turns an opcode plus payload into one contiguous, self-describing buffer
//! that can be handed to a transport in a single write.
//!
//! This crate is pure data: no I/O, no randomness, no clocks. Masking keys
//! are passed in by the caller (the send-side session in `hybi-core` draws
//! them from its environment), so the same encoding path runs identically in
//! production and in deterministic tests.
//!
//! Frame *parsing* is deliberately absent. The receive side of the protocol
//! is a separate concern with its own validation rules, and nothing here
//! should tempt a caller into reusing encoder types for it.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod close;
pub mod errors;
pub mod flags;
pub mod frame;
pub mod mask;
pub mod opcodes;

pub use close::CloseReason;
pub use errors::{ProtocolError, Result};
pub use flags::FrameFlags;
pub use frame::{Frame, Payload};
pub use mask::{MaskKey, apply_mask};
pub use opcodes::Opcode;
