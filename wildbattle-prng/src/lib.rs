pub mod rand_util;

use std::any::Any;

use rand::Rng;

/// A pseudo-random number generator that can be deterministically "replayed" from its seed.
///
/// A battle session owns exactly one generator, which feeds hit rolls, opponent selection, and
/// opponent move choice.
pub trait PseudoRandomNumberGenerator: Send + Sync {
    /// Returns the initial seed the generator was created with.
    ///
    /// The initial seed can be used to replay the random number generation sequence.
    fn initial_seed(&self) -> u64;

    /// Returns the next integer in the sequence.
    fn next(&mut self) -> u64;

    /// Mutable cast to [`Any`] for testing.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// A real implementation of [`PseudoRandomNumberGenerator`].
pub struct RealPseudoRandomNumberGenerator {
    initial_seed: u64,
    seed: u64,
}

impl RealPseudoRandomNumberGenerator {
    /// Creates a new random number generator.
    ///
    /// If two random number generators are created with the same seed, their output is exactly the
    /// same. Without a seed, one is drawn from the thread-local generator.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(Self::generate_seed);
        Self {
            initial_seed: seed,
            seed,
        }
    }

    fn generate_seed() -> u64 {
        rand::rng().random()
    }

    /// Linear Congruential Generator (LCRNG).
    fn next_seed(seed: u64) -> u64 {
        const A: u64 = 0x5D588B656C078965;
        const C: u64 = 0x0000000000269EC3;
        seed.wrapping_mul(A).wrapping_add(C)
    }
}

impl PseudoRandomNumberGenerator for RealPseudoRandomNumberGenerator {
    fn initial_seed(&self) -> u64 {
        self.initial_seed
    }

    fn next(&mut self) -> u64 {
        self.seed = Self::next_seed(self.seed);
        // The lower bits of an LCRNG have short periods.
        self.seed >> 32
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
