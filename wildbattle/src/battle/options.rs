use wildbattle_prng::{
    PseudoRandomNumberGenerator,
    RealPseudoRandomNumberGenerator,
};

/// Options that change how the battle engine behaves for a session.
#[derive(Debug)]
pub struct BattleEngineOptions {
    /// Seed for the session's random number generator.
    ///
    /// Without a seed, the generator is seeded randomly.
    pub seed: Option<u64>,

    /// Function for creating the session's random number generator.
    ///
    /// Primarily useful for tests where we wish to have fine-grained control over battle RNG.
    pub rng_factory: fn(seed: Option<u64>) -> Box<dyn PseudoRandomNumberGenerator>,
}

impl Default for BattleEngineOptions {
    fn default() -> Self {
        Self {
            seed: None,
            rng_factory: |seed: Option<u64>| Box::new(RealPseudoRandomNumberGenerator::new(seed)),
        }
    }
}
