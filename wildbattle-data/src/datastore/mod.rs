mod catalog;
mod data_store;
mod local;

pub use catalog::{
    CatalogCreature,
    CatalogList,
    NamedResource,
    creature_from_catalog_json,
};
pub use data_store::DataStore;
pub use local::LocalDataStore;
