//! Versioned schema catalog for lineage: entities, subtypes and the per-version
//! description snapshots the model compiler walks.

pub mod catalog;
pub mod error;
pub mod node;
pub mod types;
pub mod validate;
pub mod version;

#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        catalog::Catalog,
        err,
        error::ErrorTree,
        node::*,
        types::{Association, NamingMode, ScalarType, StorageType},
        version::Version,
    };
    pub use serde::{Deserialize, Serialize};
}
