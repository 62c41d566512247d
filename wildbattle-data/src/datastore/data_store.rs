use anyhow::Result;

use crate::{
    Creature,
    CreatureRef,
    Id,
    MoveData,
};

/// Collection of tables for all creature and move data.
///
/// This trait can be implemented for different data sources, such as the public catalog over the
/// network or records on disk. Lookups return `Ok(None)` when a record does not exist and `Err`
/// when the source itself fails.
pub trait DataStore: Send + Sync {
    /// Gets the names of every creature on the roster, in roster order.
    fn roster(&self) -> Result<Vec<String>>;

    /// Gets a creature by ID.
    fn get_creature(&self, id: &Id) -> Result<Option<Creature>>;
    /// Gets a creature by roster number.
    fn get_creature_by_number(&self, number: u16) -> Result<Option<Creature>>;
    /// Gets move details by ID.
    fn get_move(&self, id: &Id) -> Result<Option<MoveData>>;

    /// Gets a creature by number or name.
    fn get_creature_by_ref(&self, creature: &CreatureRef) -> Result<Option<Creature>> {
        match creature {
            CreatureRef::Number(number) => self.get_creature_by_number(*number),
            CreatureRef::Name(id) => self.get_creature(id),
        }
    }
}
