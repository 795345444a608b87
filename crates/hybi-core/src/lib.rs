//! Send-side session logic for the HyBi framing protocol.
//!
//! This crate decides *how* an application message or control signal becomes
//! frames on the wire; it never decides when to send or what the content
//! means. Frame layout itself lives in `hybi-proto`.
//!
//! # Architecture
//!
//! The session logic is deterministic and isolated from I/O and randomness.
//! All external effects are supplied explicitly:
//!
//! - Mask-key randomness comes through the [`env::Environment`] trait, so
//!   production draws from the system RNG while tests replay seeded keys.
//! - The transport is reached only through the [`sink::FrameSink`] trait,
//!   which takes one fully built frame buffer per call. Frame construction
//!   is never suspended mid-buffer; an operation either hands a complete
//!   frame to the sink or fails before any byte is written.
//!
//! Fragmentation state is per-connection and single-writer. [`Sender`] holds
//! it behind `&mut self`, so the "no concurrent sends on one connection"
//! precondition is enforced structurally rather than by locking.
//!
//! # Components
//!
//! - [`fragment`]: fragmentation state machine (which opcode the next data
//!   frame carries)
//! - [`mod@env`]: environment abstraction (mask-key randomness)
//! - [`sink`]: transport sink abstraction
//! - [`sender`]: the four public operations (send, ping, pong, close)
//! - [`error`]: send error types

pub mod env;
pub mod error;
pub mod fragment;
pub mod sender;
pub mod sink;

pub use env::{Environment, SystemEnv};
pub use error::SendError;
pub use fragment::{FragmentState, FragmentTracker};
pub use sender::{SendOptions, Sender};
pub use sink::{FrameSink, StreamSink};
