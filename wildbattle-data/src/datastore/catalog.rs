use anyhow::{
    Error,
    Result,
};
use serde::Deserialize;

use crate::{
    Creature,
    Id,
    LearnableMove,
    ROSTER_SIZE,
    Stat,
    StatTable,
};

/// A named reference to another catalog resource.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

/// A paginated list of named resources, as returned by the catalog's list endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogList {
    pub results: Vec<NamedResource>,
}

#[derive(Debug, Clone, Deserialize)]
struct CatalogStatName {
    name: Stat,
}

#[derive(Debug, Clone, Deserialize)]
struct CatalogStat {
    base_stat: u16,
    stat: CatalogStatName,
}

#[derive(Debug, Clone, Deserialize)]
struct CatalogVersionGroupDetail {
    version_group: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
struct CatalogMoveEntry {
    #[serde(rename = "move")]
    mov: NamedResource,
    #[serde(default)]
    version_group_details: Vec<CatalogVersionGroupDetail>,
}

/// A creature record in the catalog's shape.
///
/// Stats arrive as a list tagged by stat name, and moves carry every version group that lists
/// them. Unknown fields (sprites, height, weight, and so on) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogCreature {
    id: u16,
    name: String,
    stats: Vec<CatalogStat>,
    #[serde(default)]
    moves: Vec<CatalogMoveEntry>,
}

impl TryFrom<CatalogCreature> for Creature {
    type Error = Error;

    fn try_from(value: CatalogCreature) -> Result<Self> {
        if value.id == 0 || value.id > ROSTER_SIZE {
            return Err(Error::msg(format!(
                "creature {} has number {}, which is not on the roster",
                value.name, value.id
            )));
        }
        let stats = value
            .stats
            .into_iter()
            .map(|stat| (stat.stat.name, stat.base_stat))
            .collect::<StatTable>();
        let moves = value
            .moves
            .into_iter()
            .map(|entry| LearnableMove {
                name: entry.mov.name,
                rulesets: entry
                    .version_group_details
                    .into_iter()
                    .map(|detail| Id::from(detail.version_group.name))
                    .collect(),
            })
            .collect();
        Ok(Self {
            number: value.id,
            name: value.name,
            stats,
            moves,
        })
    }
}

/// Parses a creature from a catalog JSON record.
pub fn creature_from_catalog_json(json: &str) -> Result<Creature> {
    serde_json::from_str::<CatalogCreature>(json)
        .map_err(Error::new)?
        .try_into()
}
