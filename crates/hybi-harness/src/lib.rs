//! Deterministic test support for HyBi send-side framing.
//!
//! Seeded implementations of the environment and sink abstractions from
//! `hybi-core`, a test-only frame inspector, and a turmoil transport adapter
//! for exercising the sender over a simulated network.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod capture;
pub mod frame_view;
pub mod sim_env;
pub mod sim_transport;

pub use capture::CaptureSink;
pub use frame_view::FrameView;
pub use sim_env::SimEnv;
pub use sim_transport::SimTransport;
