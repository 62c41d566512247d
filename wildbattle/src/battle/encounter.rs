//! Random opponent selection for new encounters.

use anyhow::Result;
use wildbattle_data::{
    DataStore,
    Id,
};
use wildbattle_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};

use crate::{
    battle::Combatant,
    error::{
        WrapOptionError,
        WrapResultError,
    },
};

/// Picks a creature name uniformly at random from the roster.
pub fn random_creature_name(
    data: &dyn DataStore,
    prng: &mut dyn PseudoRandomNumberGenerator,
) -> Result<String> {
    let roster = data
        .roster()
        .wrap_error_with_message("failed to fetch roster")?;
    rand_util::sample_slice(prng, &roster)
        .cloned()
        .wrap_not_found_error("creature on an empty roster")
}

/// Generates a fresh, full-health opponent picked at random from the roster.
pub fn generate_opponent(
    data: &dyn DataStore,
    prng: &mut dyn PseudoRandomNumberGenerator,
) -> Result<Combatant> {
    let name = random_creature_name(data, prng)?;
    let creature = data
        .get_creature(&Id::from(name.as_str()))
        .wrap_error_with_message(format!("failed to fetch creature {name}"))?
        .wrap_not_found_error_with_format(format_args!("creature {name}"))?;
    ::log::debug!("generated opponent {} (#{})", creature.name, creature.number);
    Ok(Combatant::from_creature(creature, data))
}
