use crate::types::ScalarType;
use serde::{Deserialize, Serialize};

///
/// Identifier
///
/// How an entity instance is uniquely named. `Property` defers to one of the
/// entity's own properties, which may be a to-one relationship whose target
/// identifier applies in turn.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Identifier {
    Property(String),
    Relationships {
        scalar_type: ScalarType,
        entities: Vec<String>,
    },
    ScalarType(ScalarType),
    #[default]
    Void,
}

impl Identifier {
    #[must_use]
    pub fn property(name: impl Into<String>) -> Self {
        Self::Property(name.into())
    }

    #[must_use]
    pub const fn is_void(&self) -> bool {
        matches!(self, Self::Void)
    }
}
