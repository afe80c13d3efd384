//! Production selector backed by a seedable RNG

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::CandidateSelector;

/// Uniform-random selector over `StdRng`.
///
/// The RNG lives behind a mutex so the selector can be shared across
/// request handlers; contention is negligible at pick granularity.
pub struct RandomSelector {
    rng: Mutex<StdRng>,
}

impl RandomSelector {
    /// Create a selector seeded from system entropy
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Create a deterministically seeded selector for tests
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl CandidateSelector for RandomSelector {
    fn pick(&self, eligible: &[String], count: usize) -> Vec<String> {
        let mut rng = self.rng.lock();
        eligible
            .choose_multiple(&mut *rng, count)
            .cloned()
            .collect()
    }
}
