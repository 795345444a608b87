//! Environment abstraction for mask-key randomness.
//!
//! Masking keys are the only non-deterministic input to the send path, so
//! they come through a trait: production draws from the system RNG, while
//! the test harness replays a seeded stream to make wire bytes reproducible.

use hybi_proto::MaskKey;

/// Source of per-frame masking keys.
///
/// Keys must vary per frame; a reused or predictable key defeats masking's
/// anti-proxy-caching purpose. Cryptographic strength is not required.
pub trait Environment: Send {
    /// Draw a fresh 4-byte masking key.
    fn mask_key(&mut self) -> MaskKey;
}

/// Production environment backed by the thread-local system RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl SystemEnv {
    /// Create the production environment.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Environment for SystemEnv {
    fn mask_key(&mut self) -> MaskKey {
        rand::random()
    }
}
