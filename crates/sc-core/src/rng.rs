//! Explicitly owned simulation RNG.
//!
//! # Determinism strategy
//!
//! There is no process-wide generator.  Every consumer receives its own
//! `SimRng`, seeded by:
//!
//!   seed = master_seed XOR ((stream + 1) * MIXING_CONSTANT)
//!
//! where `stream` names the purpose (population build, destination draw,
//! iteration `k`, …).  The mixing constant is the 64-bit fractional part of
//! the golden ratio, which spreads consecutive stream numbers uniformly across
//! the seed space.  This means:
//!
//! - Iterations never share RNG state, so they can run on separate workers.
//! - An iteration's draws depend only on `(master_seed, iteration)`, never on
//!   how many other iterations ran before it.

use rand::distributions::Distribution;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Simulation RNG.  Never shared: each iteration owns its own stream.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed an independent stream from the master seed and a stream number.
    pub fn stream(master_seed: u64, stream: u64) -> Self {
        // +1 keeps stream 0 distinct from `SimRng::new(master_seed)`.
        let seed = master_seed ^ stream.wrapping_add(1).wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Draw one value from `dist`.
    #[inline]
    pub fn sample<T, D: Distribution<T>>(&mut self, dist: &D) -> T {
        dist.sample(&mut self.0)
    }
}
