mod creature;
mod roster;
mod stat;

pub use creature::{
    Creature,
    LearnableMove,
};
pub use roster::{
    CreatureRef,
    ROSTER_SIZE,
    display_name,
    roster_options,
};
pub use stat::{
    Stat,
    StatTable,
};
