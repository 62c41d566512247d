use anyhow::Result;
use wildbattle::{
    BattleEngineOptions,
    BattleSession,
};
use wildbattle_data::{
    CreatureRef,
    DataStore,
};

use crate::ControlledRandomNumberGenerator;

/// Session builder object for integration tests.
pub struct TestSessionBuilder {
    player: CreatureRef,
    engine_options: BattleEngineOptions,
    controlled_rng: bool,
}

impl TestSessionBuilder {
    /// Creates a new [`TestSessionBuilder`] for the given player creature.
    pub fn new(player: &str) -> Self {
        Self {
            player: CreatureRef::name(player),
            engine_options: BattleEngineOptions::default(),
            controlled_rng: false,
        }
    }

    /// Builds a new [`BattleSession`] from the session builder.
    pub fn build(mut self, data: &dyn DataStore) -> Result<BattleSession<'_>> {
        if self.controlled_rng {
            self.engine_options.rng_factory =
                |seed: Option<u64>| Box::new(ControlledRandomNumberGenerator::new(seed));
        }
        BattleSession::new(data, &self.player, self.engine_options)
    }

    pub fn with_player(mut self, player: CreatureRef) -> Self {
        self.player = player;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.engine_options.seed = Some(seed);
        self
    }

    pub fn with_controlled_rng(mut self, controlled_rng: bool) -> Self {
        self.controlled_rng = controlled_rng;
        self
    }
}
