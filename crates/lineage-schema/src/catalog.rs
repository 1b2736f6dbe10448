use crate::{
    error::ErrorTree,
    node::Descriptions,
    validate::validate_catalog,
    version::Version,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error as ThisError;

///
/// CatalogError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum CatalogError {
    #[error("could not find descriptions for version {version}")]
    MissingDescriptions { version: Version },
}

///
/// Catalog
///
/// Every released description snapshot keyed by version, plus the versions
/// kept as migration checkpoints. Built once and only read afterwards.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Catalog {
    descriptions: BTreeMap<Version, Descriptions>,

    #[serde(default)]
    history_versions: Vec<Version>,
}

impl Catalog {
    #[must_use]
    pub const fn new(
        descriptions: BTreeMap<Version, Descriptions>,
        history_versions: Vec<Version>,
    ) -> Self {
        Self {
            descriptions,
            history_versions,
        }
    }

    pub fn descriptions(&self, version: Version) -> Result<&Descriptions, CatalogError> {
        self.descriptions
            .get(&version)
            .ok_or(CatalogError::MissingDescriptions { version })
    }

    /// Snapshots in ascending version order.
    pub fn iter(&self) -> impl Iterator<Item = (Version, &Descriptions)> {
        self.descriptions.iter().map(|(v, d)| (*v, d))
    }

    /// Migration checkpoints, in the order they were supplied.
    #[must_use]
    pub fn history_versions(&self) -> &[Version] {
        &self.history_versions
    }

    #[must_use]
    pub fn contains(&self, version: Version) -> bool {
        self.descriptions.contains_key(&version)
    }

    /// Run every catalog-wide check and report all failures at once.
    pub fn validate(&self) -> Result<(), ErrorTree> {
        validate_catalog(self)
    }
}

impl FromIterator<(Version, Descriptions)> for Catalog {
    fn from_iter<T: IntoIterator<Item = (Version, Descriptions)>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect(), Vec::new())
    }
}

///
/// TESTS
///
