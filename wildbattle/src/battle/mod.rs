mod combatant;
pub mod encounter;
mod options;
mod outcome;
mod phase;
mod session;

pub use combatant::Combatant;
pub use options::BattleEngineOptions;
pub use outcome::{
    MoveOutcome,
    Side,
    SideAction,
    TurnOutcome,
};
pub use phase::Phase;
pub use session::BattleSession;
