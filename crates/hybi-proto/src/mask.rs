//! Payload masking.
//!
//! Client-to-server frames XOR the payload with a 4-byte key that repeats
//! every four bytes. The point is not secrecy but breaking up predictable
//! byte patterns so misbehaving intermediaries cannot cache or rewrite
//! framed traffic. The key must be freshly drawn per frame; generation
//! lives with the caller's environment, not here.

/// Per-frame masking key.
pub type MaskKey = [u8; 4];

/// XOR `buf` in place with `key[i % 4]`.
///
/// Masking is an involution: applying the same key twice restores the
/// original bytes.
pub fn apply_mask(buf: &mut [u8], key: MaskKey) {
    for (i, byte) in buf.iter_mut().enumerate() {
        *byte ^= key[i % 4];
    }
}
