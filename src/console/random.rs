//! Random choice for the computer opponent.
//!
//! The orchestrator never reaches for a global RNG. It is handed a
//! [`RandomSource`], so a seeded [`GameRng`] makes a game reproducible and
//! tests can substitute a closure.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::instrument;

/// Picks an index uniformly from `0..len`.
pub trait RandomSource {
    /// Returns an index in `0..len`. Callers never pass `len == 0`.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Any `FnMut(len) -> index` can stand in for randomness.
impl<F> RandomSource for F
where
    F: FnMut(usize) -> usize,
{
    fn pick_index(&mut self, len: usize) -> usize {
        self(len)
    }
}

/// Deterministic RNG seeded from a `u64`.
///
/// ChaCha8 gives the same sequence for the same seed on every platform.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    #[instrument]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG from a fresh random seed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG started from.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for GameRng {
    fn pick_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }
}
