mod accuracy;
mod move_data;

pub use accuracy::Accuracy;
pub use move_data::MoveData;
