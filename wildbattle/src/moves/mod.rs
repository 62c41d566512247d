mod damage;
mod move_set;

pub use damage::{
    DamageInput,
    LEVEL,
    MODIFIER,
    hits,
    resolve_damage,
    roll_hit,
};
pub use move_set::{
    Move,
    MoveSet,
    RULESET,
    legal_moves,
};
