//! Frame opcodes.

/// The 4-bit opcode in the first header byte.
///
/// Data frames (`Text`, `Binary`, `Continuation`) may be fragmented across
/// multiple frames; control frames (`Close`, `Ping`, `Pong`) never are and
/// may interleave with an in-progress fragmented message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Opcode {
    /// Non-first frame of a fragmented message.
    Continuation = 0x0,
    /// UTF-8 text data.
    Text = 0x1,
    /// Binary data.
    Binary = 0x2,
    /// Connection close.
    Close = 0x8,
    /// Keepalive probe.
    Ping = 0x9,
    /// Keepalive response.
    Pong = 0xA,
}

impl Opcode {
    /// Wire value of this opcode.
    #[must_use]
    pub fn to_u8(self) -> u8 {
        self as u8
    }

    /// Opcode for a wire value, if it names one this core sends.
    #[must_use]
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0x0 => Some(Self::Continuation),
            0x1 => Some(Self::Text),
            0x2 => Some(Self::Binary),
            0x8 => Some(Self::Close),
            0x9 => Some(Self::Ping),
            0xA => Some(Self::Pong),
            _ => None,
        }
    }

    /// True for close/ping/pong.
    ///
    /// Control frames are always final and never participate in
    /// fragmentation tracking.
    #[must_use]
    pub fn is_control(self) -> bool {
        self.to_u8() >= 0x8
    }
}
