//! Random source construction.
//!
//! How random bits are produced is left to `rand`; this module only decides
//! whether an rng is seeded from entropy or from a fixed value.

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Trait for providing random number generators
pub trait RngProvider: Send + Sync {
    /// The type of RNG this provider creates
    type Rng: rand::RngCore + Send;

    /// Create a new RNG instance with an optional seed
    fn create_rng(&self, seed: Option<u64>) -> Self::Rng;

    /// Create an RNG for one worker out of many
    ///
    /// Workers get distinct streams derived from the base seed so that
    /// parallel samples stay independent yet reproducible.
    fn create_worker_rng(&self, seed: Option<u64>, worker: usize) -> Self::Rng {
        self.create_rng(seed.map(|seed| seed.wrapping_add(worker as u64)))
    }
}

/// Default RNG provider backed by `StdRng`
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRngProvider;

impl RngProvider for DefaultRngProvider {
    type Rng = StdRng;

    fn create_rng(&self, seed: Option<u64>) -> Self::Rng {
        match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Create a new entropy-seeded RNG
pub fn create_rng() -> StdRng {
    DefaultRngProvider.create_rng(None)
}

/// Create a new RNG with a specific seed
pub fn create_seeded_rng(seed: u64) -> StdRng {
    DefaultRngProvider.create_rng(Some(seed))
}
