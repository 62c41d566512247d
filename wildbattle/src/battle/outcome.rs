use std::fmt::{
    self,
    Display,
};

use serde::Serialize;

/// One side of a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    /// The other side.
    pub fn foe(&self) -> Self {
        match self {
            Self::Player => Self::Opponent,
            Self::Opponent => Self::Player,
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player => write!(f, "player"),
            Self::Opponent => write!(f, "opponent"),
        }
    }
}

/// The result of one side using a move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveOutcome {
    pub user: Side,
    pub move_name: String,
    pub hit_roll: u8,
    pub hit: bool,
    pub damage: u16,
    /// Health of the target after the damage was applied.
    pub target_health: u16,
}

/// What one side did during a turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum SideAction {
    /// The side used a move.
    Move(MoveOutcome),
    /// The side has no legal moves, so it did nothing.
    NoMove,
    /// The side fainted before it could act.
    Skipped,
}

impl SideAction {
    pub fn outcome(&self) -> Option<&MoveOutcome> {
        match self {
            Self::Move(outcome) => Some(outcome),
            _ => None,
        }
    }
}

/// The result of a single resolved turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnOutcome {
    pub turn: u32,
    pub player_action: SideAction,
    pub opponent_action: SideAction,
    pub player_health: u16,
    pub opponent_health: u16,
    pub player_fainted: bool,
    pub opponent_fainted: bool,
}
