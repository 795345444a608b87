//! Fragmentation state machine.
//!
//! A fragmented message declares its real opcode only on the first frame;
//! every later frame carries opcode 0 (continuation) and only the last frame
//! sets FIN. This module tracks the one bit of per-connection state needed
//! to get that right.
//!
//! # State Machine
//!
//! ```text
//!                    fin=false
//!       ┌────────────┐  ────>  ┌────────────┐
//!       │ NewMessage │         │ Continuing │──┐ fin=false
//!       └────────────┘  <────  └────────────┘<─┘
//!                    fin=true
//! ```
//!
//! | state      | fin   | opcode emitted  | next state |
//! |------------|-------|-----------------|------------|
//! | NewMessage | true  | caller's opcode | NewMessage |
//! | NewMessage | false | caller's opcode | Continuing |
//! | Continuing | true  | continuation    | NewMessage |
//! | Continuing | false | continuation    | Continuing |
//!
//! Only data frames participate. Control frames are never fragmented and may
//! interleave with an in-progress message, so ping/pong/close never consult
//! or advance this machine.

use hybi_proto::Opcode;

/// Position of the next data frame within a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FragmentState {
    /// Next data frame starts a new message and carries the real opcode.
    #[default]
    NewMessage,
    /// Next data frame continues a fragmented message with opcode 0.
    Continuing,
}

/// Per-connection fragmentation tracker.
///
/// Reading the opcode and advancing the state are separate steps: the sender
/// reads first, encodes and writes the frame, and advances only after the
/// write succeeds. A failed operation therefore leaves the sequence exactly
/// where it was.
#[derive(Debug, Clone, Default)]
pub struct FragmentTracker {
    state: FragmentState,
}

impl FragmentTracker {
    /// Tracker for a fresh connection (next send starts a new message).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> FragmentState {
        self.state
    }

    /// Opcode the next data frame must carry, given the caller's opcode.
    #[must_use]
    pub fn frame_opcode(&self, data_opcode: Opcode) -> Opcode {
        match self.state {
            FragmentState::NewMessage => data_opcode,
            FragmentState::Continuing => Opcode::Continuation,
        }
    }

    /// Record that a data frame with the given finality was sent.
    pub fn advance(&mut self, fin: bool) {
        self.state = if fin { FragmentState::NewMessage } else { FragmentState::Continuing };
    }
}
