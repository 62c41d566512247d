use wildbattle_data::{
    Creature,
    DataStore,
};

use crate::moves::{
    MoveSet,
    legal_moves,
};

/// A creature taking part in a battle, with its current health.
///
/// Health never leaves `[0, max_health]`.
#[derive(Debug, Clone)]
pub struct Combatant {
    creature: Creature,
    moves: MoveSet,
    health: u16,
}

impl Combatant {
    /// Creates a combatant at full health.
    pub fn new(creature: Creature, moves: MoveSet) -> Self {
        let health = creature.max_health();
        Self {
            creature,
            moves,
            health,
        }
    }

    /// Creates a combatant at full health, with the creature's legal moves.
    pub fn from_creature(creature: Creature, data: &dyn DataStore) -> Self {
        let moves = legal_moves(&creature, data);
        Self::new(creature, moves)
    }

    pub fn creature(&self) -> &Creature {
        &self.creature
    }

    pub fn name(&self) -> &str {
        &self.creature.name
    }

    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    pub fn health(&self) -> u16 {
        self.health
    }

    pub fn max_health(&self) -> u16 {
        self.creature.max_health()
    }

    pub fn fainted(&self) -> bool {
        self.health == 0
    }

    /// Applies damage, clamping health at zero. Returns the remaining health.
    pub fn apply_damage(&mut self, damage: u16) -> u16 {
        self.health = self.health.saturating_sub(damage);
        self.health
    }

    /// Restores health to the maximum.
    pub fn restore(&mut self) {
        self.health = self.max_health();
    }
}

#[cfg(test)]
mod combatant_test {
    use wildbattle_data::{
        Creature,
        StatTable,
    };

    use crate::{
        battle::Combatant,
        moves::MoveSet,
    };

    fn combatant(hp: u16) -> Combatant {
        Combatant::new(
            Creature {
                number: 16,
                name: "pidgey".to_owned(),
                stats: StatTable {
                    hp,
                    atk: 45,
                    def: 40,
                    ..Default::default()
                },
                moves: Vec::new(),
            },
            MoveSet::default(),
        )
    }

    #[test]
    fn starts_at_max_health() {
        let combatant = combatant(40);
        assert_eq!(combatant.health(), 40);
        assert_eq!(combatant.max_health(), 40);
        assert!(!combatant.fainted());
    }

    #[test]
    fn clamps_health_at_zero() {
        let mut combatant = combatant(10);
        assert_eq!(combatant.apply_damage(4), 6);
        assert_eq!(combatant.apply_damage(15), 0);
        assert!(combatant.fainted());
        assert_eq!(combatant.apply_damage(u16::MAX), 0);
    }

    #[test]
    fn restores_to_max_health() {
        let mut combatant = combatant(40);
        combatant.apply_damage(40);
        combatant.restore();
        assert_eq!(combatant.health(), 40);
        assert!(!combatant.fainted());
    }
}
