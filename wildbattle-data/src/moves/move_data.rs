use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    Accuracy,
    Id,
    Identifiable,
};

/// Catalog details about a single move.
///
/// Every numeric detail may be missing from the catalog. Fields that the catalog leaves out or sets
/// to `null` are unavailable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveData {
    /// Name of the move.
    pub name: String,
    /// Base power.
    #[serde(default)]
    pub power: Option<u16>,
    /// Base accuracy.
    #[serde(default)]
    pub accuracy: Accuracy,
    /// Power points.
    #[serde(default)]
    pub pp: Option<u8>,
}

impl MoveData {
    /// Creates move data with every detail unavailable.
    pub fn unavailable<S>(name: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            name: name.into(),
            power: None,
            accuracy: Accuracy::Unavailable,
            pp: None,
        }
    }
}

impl Identifiable for MoveData {
    fn id(&self) -> Id {
        Id::from(self.name.as_str())
    }
}
