//! Epoch-level sample shuffling.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Owns the sample permutation and its RNG.
///
/// The RNG is seeded once at construction and advanced once per epoch by
/// [`reshuffle`](Self::reshuffle); it is never reset mid-run. Two shufflers
/// built with the same seed and sample count therefore produce identical
/// permutation sequences.
#[derive(Debug, Clone)]
pub struct EpochShuffler {
    order: Vec<usize>,
    rng: StdRng,
}

impl EpochShuffler {
    /// Create a shuffler over `0..n_samples` with the given seed.
    pub fn new(n_samples: usize, seed: u64) -> Self {
        Self {
            order: (0..n_samples).collect(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Re-shuffle the permutation for a new epoch (Fisher-Yates) and return it.
    pub fn reshuffle(&mut self) -> &[usize] {
        self.order.shuffle(&mut self.rng);
        &self.order
    }

    /// The current permutation.
    pub fn order(&self) -> &[usize] {
        &self.order
    }
}
