//! Frame flag bits.

use bitflags::bitflags;

bitflags! {
    /// The top nibble of the first header byte.
    ///
    /// `FIN` marks the last frame of a message. The RSV bits are reserved
    /// for extensions; this core negotiates none and always emits them as
    /// zero, but routing the nibble through one named type keeps the bit
    /// layout in a single place.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FrameFlags: u8 {
        /// Final frame of a message.
        const FIN = 0x80;
        /// Reserved extension bit 1.
        const RSV1 = 0x40;
        /// Reserved extension bit 2.
        const RSV2 = 0x20;
        /// Reserved extension bit 3.
        const RSV3 = 0x10;
    }
}

impl FrameFlags {
    /// Flags for a frame with the given finality and no extension bits.
    #[must_use]
    pub fn with_fin(fin: bool) -> Self {
        if fin { Self::FIN } else { Self::empty() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fin_is_high_bit() {
        assert_eq!(FrameFlags::FIN.bits(), 0x80);
        assert_eq!(FrameFlags::with_fin(true).bits(), 0x80);
        assert_eq!(FrameFlags::with_fin(false).bits(), 0x00);
    }

    #[test]
    fn flags_occupy_top_nibble() {
        assert_eq!(FrameFlags::all().bits(), 0xF0);
    }
}
