use std::{
    any::Any,
    collections::hash_map::Entry,
};

use ahash::{
    HashMap,
    HashMapExt,
};
use wildbattle::BattleSession;
use wildbattle_prng::{
    PseudoRandomNumberGenerator,
    RealPseudoRandomNumberGenerator,
};

/// A controlled random number generator, for tests that need fine-grained control over session
/// RNG.
///
/// Fake values are keyed by their 1-based position in the sequence. Hit rolls are
/// `value % 100 + 1`, so a fake value of 0 always hits and 99 misses anything below 100 accuracy.
pub struct ControlledRandomNumberGenerator {
    count: usize,
    fake_values: HashMap<usize, u64>,
    real: RealPseudoRandomNumberGenerator,
}

impl ControlledRandomNumberGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            count: 0,
            fake_values: HashMap::new(),
            real: RealPseudoRandomNumberGenerator::new(seed),
        }
    }

    pub fn sequence_count(&self) -> usize {
        self.count
    }

    pub fn insert_fake_value(&mut self, count: usize, value: u64) {
        self.fake_values.insert(count, value);
    }

    /// Inserts fake values at positions relative to the current sequence count, so `1` is the next
    /// value drawn.
    pub fn insert_fake_values_relative_to_sequence_count<I>(&mut self, iterable: I)
    where
        I: IntoIterator<Item = (usize, u64)>,
    {
        let count = self.count;
        self.fake_values.extend(
            iterable
                .into_iter()
                .map(|(offset, value)| (count + offset, value)),
        );
    }
}

impl PseudoRandomNumberGenerator for ControlledRandomNumberGenerator {
    fn initial_seed(&self) -> u64 {
        self.real.initial_seed()
    }

    fn next(&mut self) -> u64 {
        // Roll the underlying RNG to keep the sequence consistent, even if we do not use the value.
        let next = self.real.next();
        self.count += 1;
        match self.fake_values.entry(self.count) {
            Entry::Occupied(fake_entry) => fake_entry.remove(),
            Entry::Vacant(_) => next,
        }
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Returns the session's generator if the session was built with a controlled one.
pub fn get_controlled_rng_for_session<'s>(
    session: &'s mut BattleSession,
) -> Option<&'s mut ControlledRandomNumberGenerator> {
    session
        .prng()
        .as_any_mut()
        .downcast_mut::<ControlledRandomNumberGenerator>()
}
