use ahash::{
    HashMap,
    HashMapExt,
    HashSet,
    HashSetExt,
};
use anyhow::{
    Error,
    Result,
};
use wildbattle_data::{
    Creature,
    DataStore,
    Id,
    Identifiable,
    LearnableMove,
    MoveData,
    StatTable,
};

/// Creates a creature for tests.
///
/// Every move is listed under the `red-blue` ruleset.
pub fn test_creature(number: u16, name: &str, stats: StatTable, moves: &[&str]) -> Creature {
    Creature {
        number,
        name: name.to_owned(),
        stats,
        moves: moves
            .iter()
            .map(|mov| LearnableMove {
                name: (*mov).to_owned(),
                rulesets: Vec::from_iter([Id::from("red-blue")]),
            })
            .collect(),
    }
}

/// An in-memory [`DataStore`] for tests.
///
/// Creatures are added to the roster in insertion order. Individual lookups can be made to fail,
/// simulating an unavailable catalog.
#[derive(Default)]
pub struct TestDataStore {
    roster: Vec<String>,
    creatures: HashMap<Id, Creature>,
    moves: HashMap<Id, MoveData>,
    failing_creatures: HashSet<Id>,
    failing_moves: HashSet<Id>,
    failing_roster: bool,
}

impl TestDataStore {
    pub fn new() -> Self {
        Self {
            roster: Vec::new(),
            creatures: HashMap::new(),
            moves: HashMap::new(),
            failing_creatures: HashSet::new(),
            failing_moves: HashSet::new(),
            failing_roster: false,
        }
    }

    /// Adds a creature and appends it to the roster.
    pub fn with_creature(mut self, creature: Creature) -> Self {
        self.roster.push(creature.name.clone());
        self.creatures.insert(creature.id(), creature);
        self
    }

    /// Appends a name to the roster without a creature record behind it.
    pub fn with_roster_entry(mut self, name: &str) -> Self {
        self.roster.push(name.to_owned());
        self
    }

    pub fn with_move(mut self, move_data: MoveData) -> Self {
        self.moves.insert(move_data.id(), move_data);
        self
    }

    /// Adds a move with the given power and accuracy.
    pub fn with_move_details(
        self,
        name: &str,
        power: Option<u16>,
        accuracy: Option<u8>,
        pp: Option<u8>,
    ) -> Self {
        self.with_move(MoveData {
            name: name.to_owned(),
            power,
            accuracy: accuracy.into(),
            pp,
        })
    }

    /// Makes lookups for the given creature fail.
    pub fn with_failing_creature(mut self, name: &str) -> Self {
        self.failing_creatures.insert(Id::from(name));
        self
    }

    /// Makes lookups for the given move fail.
    pub fn with_failing_move(mut self, name: &str) -> Self {
        self.failing_moves.insert(Id::from(name));
        self
    }

    /// Makes roster lookups fail.
    pub fn with_failing_roster(mut self) -> Self {
        self.failing_roster = true;
        self
    }
}

impl DataStore for TestDataStore {
    fn roster(&self) -> Result<Vec<String>> {
        if self.failing_roster {
            return Err(Error::msg("roster unavailable"));
        }
        Ok(self.roster.clone())
    }

    fn get_creature(&self, id: &Id) -> Result<Option<Creature>> {
        if self.failing_creatures.contains(id) {
            return Err(Error::msg(format!("creature {id} unavailable")));
        }
        Ok(self.creatures.get(id).cloned())
    }

    fn get_creature_by_number(&self, number: u16) -> Result<Option<Creature>> {
        match self
            .creatures
            .values()
            .find(|creature| creature.number == number)
        {
            Some(creature) => self.get_creature(&creature.id()),
            None => Ok(None),
        }
    }

    fn get_move(&self, id: &Id) -> Result<Option<MoveData>> {
        if self.failing_moves.contains(id) {
            return Err(Error::msg(format!("move {id} unavailable")));
        }
        Ok(self.moves.get(id).cloned())
    }
}
