pub mod battle;
pub mod error;
pub mod log;
pub mod moves;

pub use battle::{
    BattleEngineOptions,
    BattleSession,
    Combatant,
    MoveOutcome,
    Phase,
    Side,
    SideAction,
    TurnOutcome,
};
pub use error::{
    IllegalTransitionError,
    NotFoundError,
    WrapOptionError,
    WrapResultError,
};
pub use moves::{
    DamageInput,
    LEVEL,
    MODIFIER,
    Move,
    MoveSet,
    RULESET,
    legal_moves,
    resolve_damage,
};
pub use wildbattle_data as data;
pub use wildbattle_prng as rng;
