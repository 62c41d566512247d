use std::fmt::Display;

use itertools::Itertools;
use serde::Serialize;
use wildbattle_data::{
    Accuracy,
    Creature,
    DataStore,
    Id,
    Identifiable,
    LearnableMove,
    MoveData,
};

/// The ruleset whose moves are legal in battle.
pub const RULESET: &str = "red-blue";

/// A legal move, with its catalog details attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Move {
    pub id: Id,
    pub name: String,
    pub power: Option<u16>,
    pub accuracy: Accuracy,
    /// Informational only. Using a move never consumes PP.
    pub pp: Option<u8>,
}

impl Move {
    /// Creates a move from its catalog details.
    pub fn new<S>(name: S, data: MoveData) -> Self
    where
        S: Into<String>,
    {
        let name = name.into();
        Self {
            id: Id::from(name.as_str()),
            name,
            power: data.power,
            accuracy: data.accuracy,
            pp: data.pp,
        }
    }

    /// Creates a move whose details could not be fetched.
    pub fn unavailable<S>(name: S) -> Self
    where
        S: Into<String>,
    {
        let name = name.into();
        Self::new(name.clone(), MoveData::unavailable(name))
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The ordered set of moves a combatant may use.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct MoveSet {
    moves: Vec<Move>,
}

impl MoveSet {
    /// Looks up a move by name, ignoring case and punctuation.
    pub fn get(&self, name: &str) -> Option<&Move> {
        self.get_by_id(&Id::from(name))
    }

    /// Looks up a move by ID.
    pub fn get_by_id(&self, id: &Id) -> Option<&Move> {
        self.iter().find(|mov| &mov.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|mov| mov.name.as_str())
    }

    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

impl FromIterator<Move> for MoveSet {
    fn from_iter<T: IntoIterator<Item = Move>>(iter: T) -> Self {
        Self {
            moves: iter.into_iter().unique_by(|mov| mov.id.clone()).collect(),
        }
    }
}

fn detailed_move(learnable: &LearnableMove, data: &dyn DataStore) -> Move {
    match data.get_move(&learnable.id()) {
        Ok(Some(details)) => Move::new(learnable.name.as_str(), details),
        Ok(None) => {
            ::log::warn!(
                "no details for move {}; power, accuracy and pp are unavailable",
                learnable.name
            );
            Move::unavailable(learnable.name.as_str())
        }
        Err(err) => {
            ::log::warn!(
                "failed to fetch details for move {}; power, accuracy and pp are unavailable: {err:#}",
                learnable.name
            );
            Move::unavailable(learnable.name.as_str())
        }
    }
}

/// Builds the legal move set of a creature.
///
/// Only moves tagged with [`RULESET`] are kept, in catalog order. Details are fetched per move; a
/// failed fetch degrades that move to unavailable details rather than failing the whole set.
pub fn legal_moves(creature: &Creature, data: &dyn DataStore) -> MoveSet {
    let ruleset = Id::from(RULESET);
    creature
        .moves_in_ruleset(&ruleset)
        .unique_by(|learnable| learnable.id())
        .map(|learnable| detailed_move(learnable, data))
        .collect()
}
