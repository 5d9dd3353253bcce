use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::catalog::Catalog;

/// Source of uniform draws used by the synthesizers.
///
/// Implementations must be uniform over the requested range; tests substitute
/// scripted sources to pin exact output. Draws that land outside the range are
/// clamped to its nearest bound before use.
pub trait RandomSource {
    /// Uniform integer in `[low, high]`. Callers guarantee `low <= high`.
    fn int_in_range(&mut self, low: u32, high: u32) -> u32;

    /// Fill `dest` with random bytes.
    fn fill_bytes(&mut self, dest: &mut [u8]);

    /// Uniform choice from a catalog.
    fn choose<'a>(&mut self, catalog: &'a Catalog) -> &'a str {
        let last = u32::try_from(catalog.len().saturating_sub(1)).unwrap_or(u32::MAX);
        catalog.get(draw(self, 0, last) as usize)
    }
}

/// Draw from `rng` and clamp the result into `[low, high]`.
pub(crate) fn draw<R: RandomSource + ?Sized>(rng: &mut R, low: u32, high: u32) -> u32 {
    rng.int_in_range(low, high).clamp(low, high)
}

/// Seeded ChaCha8 source; the same seed reproduces the same roster.
#[derive(Debug, Clone)]
pub struct ChaChaSource {
    seed: u64,
    rng: ChaCha8Rng,
}

impl ChaChaSource {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Draw a fresh seed from the thread-local generator.
    pub fn from_entropy() -> Self {
        Self::from_seed(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for ChaChaSource {
    fn int_in_range(&mut self, low: u32, high: u32) -> u32 {
        self.rng.random_range(low..=high)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest);
    }
}
