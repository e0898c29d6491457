//! Seedable RNG used for shuffling the deck.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Shuffle RNG owned by a session.
///
/// Uses ChaCha8 so a configured seed gives the same card order on every
/// platform.
#[derive(Clone, Debug)]
pub struct ShuffleRng {
    inner: ChaCha8Rng,
}

impl ShuffleRng {
    /// Create an RNG with a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create an RNG seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }

    /// Uniformly permute a slice in place (Fisher-Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}
