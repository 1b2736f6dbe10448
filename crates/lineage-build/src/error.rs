use crate::{sink::SinkError, type_map::TypeError};
use lineage_schema::{catalog::CatalogError, error::ErrorTree, version::Version};
use thiserror::Error as ThisError;

///
/// CompileError
///
/// Any failure aborts the whole run; no partial artifact is produced.
///

#[derive(Debug, ThisError)]
pub enum CompileError {
    #[error("could not find descriptions for version {version}")]
    MissingDescriptions { version: Version },

    #[error("could not find added_at_version for entity '{entity}'")]
    MissingAddedAtVersion { entity: String },

    #[error("catalog validation failed:\n{0}")]
    Validation(ErrorTree),

    #[error("entity '{entity}' at version {version}: {source}")]
    Entity {
        entity: String,
        version: Version,
        source: TypeError,
    },

    #[error("entity '{entity}' property '{property}' at version {version}: {source}")]
    Property {
        entity: String,
        property: String,
        version: Version,
        source: TypeError,
    },

    #[error(transparent)]
    Sink(#[from] SinkError),
}

impl CompileError {
    pub(crate) fn entity(entity: &str, version: Version, source: impl Into<TypeError>) -> Self {
        Self::Entity {
            entity: entity.to_string(),
            version,
            source: source.into(),
        }
    }

    pub(crate) fn property(
        entity: &str,
        property: &str,
        version: Version,
        source: impl Into<TypeError>,
    ) -> Self {
        Self::Property {
            entity: entity.to_string(),
            property: property.to_string(),
            version,
            source: source.into(),
        }
    }

    /// The type-mapping failure underneath entity or property context, if any.
    #[must_use]
    pub const fn type_error(&self) -> Option<&TypeError> {
        match self {
            Self::Entity { source, .. } | Self::Property { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<CatalogError> for CompileError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::MissingDescriptions { version } => Self::MissingDescriptions { version },
        }
    }
}
