//! Random tie-breaking.
//!
//! Every random decision of the simulation (initial conflicts and birth
//! species ties) goes through a single [`TieBreaker`], so a seeded run is
//! reproducible and tests can inject a fixed choice.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Picks one index among `len` equally eligible candidates.
pub trait TieBreaker {
    /// Returns an index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniform choice backed by a ChaCha8 generator
#[derive(Debug, Clone)]
pub struct RandomTieBreaker {
    rng: ChaCha8Rng,
}

impl RandomTieBreaker {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }
}

impl TieBreaker for RandomTieBreaker {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Always picks the candidate at a fixed index (clamped to the last one)
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedTieBreaker(pub usize);

impl TieBreaker for FixedTieBreaker {
    fn pick(&mut self, len: usize) -> usize {
        self.0.min(len - 1)
    }
}
