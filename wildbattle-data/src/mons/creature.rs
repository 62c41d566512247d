use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    Id,
    Identifiable,
    StatTable,
};

/// A move a creature can learn, with the rulesets that list it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearnableMove {
    /// Name of the move.
    pub name: String,
    /// Rulesets (catalog version groups) in which the creature can learn the move.
    #[serde(default)]
    pub rulesets: Vec<Id>,
}

impl LearnableMove {
    /// Checks if the move is listed under the given ruleset.
    pub fn in_ruleset(&self, ruleset: &Id) -> bool {
        self.rulesets.contains(ruleset)
    }
}

impl Identifiable for LearnableMove {
    fn id(&self) -> Id {
        Id::from(self.name.as_str())
    }
}

/// A creature on the roster.
///
/// Creature data is read-only once fetched. Battle-specific state, such as current health, does
/// not belong here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creature {
    /// Roster number, starting at 1.
    pub number: u16,
    /// Name.
    pub name: String,
    /// Base stats.
    pub stats: StatTable,
    /// Full move catalog, across all rulesets.
    #[serde(default)]
    pub moves: Vec<LearnableMove>,
}

impl Creature {
    /// Maximum health, which is the HP base stat.
    pub fn max_health(&self) -> u16 {
        self.stats.hp
    }

    /// Moves listed under the given ruleset, in catalog order.
    pub fn moves_in_ruleset<'c>(
        &'c self,
        ruleset: &'c Id,
    ) -> impl Iterator<Item = &'c LearnableMove> + 'c {
        self.moves.iter().filter(move |mov| mov.in_ruleset(ruleset))
    }
}

impl Identifiable for Creature {
    fn id(&self) -> Id {
        Id::from(self.name.as_str())
    }
}

#[cfg(test)]
mod creature_test {
    use crate::{
        Creature,
        Id,
        LearnableMove,
        StatTable,
    };

    fn learnable(name: &str, rulesets: &[&str]) -> LearnableMove {
        LearnableMove {
            name: name.to_owned(),
            rulesets: rulesets.iter().map(|ruleset| Id::from(*ruleset)).collect(),
        }
    }

    #[test]
    fn filters_moves_by_ruleset() {
        let creature = Creature {
            number: 1,
            name: "bulbasaur".to_owned(),
            stats: StatTable {
                hp: 45,
                ..Default::default()
            },
            moves: Vec::from_iter([
                learnable("tackle", &["red-blue", "yellow"]),
                learnable("seed-bomb", &["diamond-pearl"]),
                learnable("vine-whip", &["red-blue"]),
            ]),
        };
        let ruleset = Id::from("red-blue");
        pretty_assertions::assert_eq!(
            creature
                .moves_in_ruleset(&ruleset)
                .map(|mov| mov.name.as_str())
                .collect::<Vec<_>>(),
            vec!["tackle", "vine-whip"]
        );
        assert_eq!(creature.max_health(), 45);
    }
}
