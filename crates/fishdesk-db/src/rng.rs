//! Seeded randomness for synthetic data.
//!
//! All synthetic ids, counts and flags are drawn from a ChaCha stream so
//! the same seed always reproduces the same data set.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use sha2::{Digest, Sha256};

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// `len` random characters from `[0-9a-z]`.
pub(crate) fn base36<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect()
}

#[derive(Debug)]
pub(crate) struct SeededRng {
    rng: ChaCha20Rng,
}

impl SeededRng {
    pub(crate) fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Independent stream for `key`, stable for a given `seed`.
    pub(crate) fn for_key(seed: u64, key: &str) -> Self {
        let digest = Sha256::digest(key.as_bytes());
        let mut prefix = [0u8; 8];
        prefix.copy_from_slice(&digest[..8]);
        Self::new(seed ^ u64::from_le_bytes(prefix))
    }

    /// Uniform integer in `[min, max]`.
    pub(crate) fn next_usize(&mut self, min: usize, max: usize) -> usize {
        assert!(min <= max, "min ({min}) must be <= max ({max})");
        self.rng.gen_range(min..=max)
    }

    /// `true` with the given probability.
    pub(crate) fn next_bool(&mut self, probability: f64) -> bool {
        self.rng.gen_bool(probability)
    }

    pub(crate) fn base36(&mut self, len: usize) -> String {
        base36(&mut self.rng, len)
    }

    /// `len` random decimal digits.
    pub(crate) fn digits(&mut self, len: usize) -> String {
        (0..len)
            .map(|_| char::from(b'0' + self.rng.gen_range(0..10u8)))
            .collect()
    }
}
