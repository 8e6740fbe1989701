//! Injectable randomness for shuffling entrants and pools
//!
//! Generators never reach for process-global randomness; every shuffle goes
//! through a `RandomSource` owned by the caller.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Source of random permutations
pub trait RandomSource {
    /// Permute `slice` in place
    fn shuffle<T>(&mut self, slice: &mut [T]);
}

/// ChaCha8-backed source, reproducible when built from a seed
#[derive(Clone, Debug)]
pub struct SeededRng {
    inner: ChaCha8Rng,
}

impl SeededRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }

    /// Seeded when `seed` is given, entropy otherwise
    pub fn from_option(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::from_seed(s),
            None => Self::from_entropy(),
        }
    }
}

impl RandomSource for SeededRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}

/// Leaves every slice untouched. Useful where the input order is already final.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoShuffle;

impl RandomSource for NoShuffle {
    fn shuffle<T>(&mut self, _slice: &mut [T]) {}
}
