//! Frame encoding must never panic, whatever the inputs.

#![no_main]

use bytes::Bytes;
use hybi_proto::{Frame, FrameFlags, MaskKey, Opcode};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 6 {
        return;
    }

    let flags = FrameFlags::from_bits_truncate(data[0]);
    let opcode = Opcode::from_u8(data[1] & 0x0F).unwrap_or(Opcode::Binary);
    let mask: Option<MaskKey> =
        if data[0] & 0x01 == 0 { None } else { Some([data[2], data[3], data[4], data[5]]) };
    let payload = Bytes::copy_from_slice(&data[6..]);

    let frame = Frame { flags, opcode, mask, payload };
    if let Ok(wire) = frame.encode() {
        assert_eq!(wire.len(), frame.header_len() + frame.payload.len());
    }
});
