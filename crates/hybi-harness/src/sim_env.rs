//! Seeded environment for reproducible mask keys.

use hybi_core::Environment;
use hybi_proto::MaskKey;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Environment drawing mask keys from a seeded ChaCha8 stream.
///
/// Two `SimEnv`s built with the same seed produce identical key sequences,
/// so tests that compare wire bytes across runs stay stable.
#[derive(Debug, Clone)]
pub struct SimEnv {
    rng: ChaCha8Rng,
}

impl SimEnv {
    /// Environment with the default seed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(0)
    }

    /// Environment with an explicit seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }
}

impl Default for SimEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment for SimEnv {
    fn mask_key(&mut self) -> MaskKey {
        let mut key = [0u8; 4];
        self.rng.fill_bytes(&mut key);
        key
    }
}
