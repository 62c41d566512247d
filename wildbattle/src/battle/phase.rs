use std::fmt::{
    self,
    Display,
};

use serde::Serialize;

/// The phase of a battle session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Phase {
    /// No opponent and no active battle.
    Idle,
    /// An opponent appeared at full health.
    OpponentRevealed,
    /// The player has a pending, unconfirmed move selection.
    AwaitingMoveSelection,
    /// A turn resolved without either side fainting.
    TurnResolved,
    /// The player fainted. Only recovery is possible.
    PlayerFainted,
    /// The opponent fainted. The battle is over.
    OpponentFainted,
}

impl Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::OpponentRevealed => "opponent revealed",
            Self::AwaitingMoveSelection => "awaiting move selection",
            Self::TurnResolved => "turn resolved",
            Self::PlayerFainted => "player fainted",
            Self::OpponentFainted => "opponent fainted",
        };
        write!(f, "{name}")
    }
}
