use wildbattle_data::{
    Accuracy,
    Creature,
};
use wildbattle_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};

use crate::moves::Move;

/// The level of every combatant.
pub const LEVEL: u8 = 50;

/// The damage multiplier applied to every hit.
pub const MODIFIER: f64 = 1.0;

/// Input for the damage resolver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageInput {
    /// Level of the attacker.
    pub level: u8,
    /// Attack stat of the attacker.
    pub attack: u16,
    /// Defense stat of the defender. Zero is treated as one.
    pub defense: u16,
    /// Base power of the move. Unavailable power is treated as zero.
    pub power: Option<u16>,
    /// Accuracy of the move.
    pub accuracy: Accuracy,
    /// Final damage multiplier.
    pub modifier: f64,
}

impl DamageInput {
    /// Builds the input for an attacker using a move on a defender.
    pub fn new(attacker: &Creature, defender: &Creature, mov: &Move) -> Self {
        Self {
            level: LEVEL,
            attack: attacker.stats.atk,
            defense: defender.stats.def,
            power: mov.power,
            accuracy: mov.accuracy,
            modifier: MODIFIER,
        }
    }
}

/// Checks if a hit roll in `[1, 100]` lands for the given accuracy.
pub fn hits(accuracy: Accuracy, hit_roll: u8) -> bool {
    hit_roll <= accuracy.effective()
}

/// Draws a hit roll uniformly from `[1, 100]`.
pub fn roll_hit(prng: &mut dyn PseudoRandomNumberGenerator) -> u8 {
    rand_util::roll_percent(prng)
}

/// Resolves the damage dealt by a single move.
///
/// A miss deals 0 damage. A hit deals
/// `floor((((2 * level + 10) / 250) * (attack / defense) * power + 2) * modifier)`, computed with
/// real division in exactly that order.
pub fn resolve_damage(input: &DamageInput, hit_roll: u8) -> u16 {
    if !hits(input.accuracy, hit_roll) {
        return 0;
    }
    let level = input.level as f64;
    let attack = input.attack as f64;
    let defense = input.defense.max(1) as f64;
    let power = input.power.unwrap_or(0) as f64;
    let damage = (((2.0 * level + 10.0) / 250.0) * (attack / defense) * power + 2.0) * input.modifier;
    // Float-to-int casts saturate, so negative modifiers floor at zero.
    damage.floor() as u16
}

#[cfg(test)]
mod damage_test {
    use wildbattle_data::Accuracy;

    use crate::moves::{
        DamageInput,
        LEVEL,
        MODIFIER,
        resolve_damage,
    };

    fn input(attack: u16, defense: u16, power: Option<u16>, accuracy: Accuracy) -> DamageInput {
        DamageInput {
            level: LEVEL,
            attack,
            defense,
            power,
            accuracy,
            modifier: MODIFIER,
        }
    }

    #[test]
    fn calculates_damage_on_hit() {
        assert_eq!(
            resolve_damage(&input(49, 49, Some(35), Accuracy::Chance(100)), 1),
            17
        );
        assert_eq!(
            resolve_damage(&input(52, 43, Some(40), Accuracy::Chance(100)), 50),
            23
        );
    }

    #[test]
    fn misses_when_roll_exceeds_accuracy() {
        let input = input(49, 49, Some(35), Accuracy::Chance(70));
        assert_eq!(resolve_damage(&input, 70), 17);
        assert_eq!(resolve_damage(&input, 71), 0);
        assert_eq!(resolve_damage(&input, 100), 0);
    }

    #[test]
    fn zero_accuracy_always_misses() {
        let input = input(49, 49, Some(35), Accuracy::Chance(0));
        assert_eq!(resolve_damage(&input, 1), 0);
    }

    #[test]
    fn unavailable_power_and_accuracy_deal_flat_damage() {
        let input = input(49, 49, None, Accuracy::Unavailable);
        assert_eq!(resolve_damage(&input, 1), 2);
        assert_eq!(resolve_damage(&input, 100), 2);
    }

    #[test]
    fn zero_defense_is_treated_as_one() {
        let zero = input(10, 0, Some(33), Accuracy::Chance(100));
        let one = input(10, 1, Some(33), Accuracy::Chance(100));
        assert_eq!(resolve_damage(&zero, 1), 147);
        assert_eq!(resolve_damage(&zero, 1), resolve_damage(&one, 1));
    }

    #[test]
    fn applies_modifier_after_flat_bonus() {
        let mut input = input(49, 49, Some(35), Accuracy::Chance(100));
        input.modifier = 2.0;
        assert_eq!(resolve_damage(&input, 1), 34);
        input.modifier = -1.0;
        assert_eq!(resolve_damage(&input, 1), 0);
    }
}
