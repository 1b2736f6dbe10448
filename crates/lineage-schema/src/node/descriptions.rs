use crate::node::{Entity, LookupError, Subtype};
use serde::{Deserialize, Serialize};

///
/// Descriptions
///
/// The whole schema as authored for one version. Entities keep their
/// authoring order, which is also the order the model is emitted in.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Descriptions {
    #[serde(default)]
    pub entities: Vec<Entity>,

    #[serde(default)]
    pub subtypes: Vec<Subtype>,
}

impl Descriptions {
    #[must_use]
    pub const fn new(entities: Vec<Entity>, subtypes: Vec<Subtype>) -> Self {
        Self { entities, subtypes }
    }

    pub fn entity(&self, name: &str) -> Result<&Entity, LookupError> {
        self.entities
            .iter()
            .find(|e| e.name == name)
            .ok_or_else(|| LookupError::UnknownEntity(name.to_string()))
    }

    pub fn subtype(&self, name: &str) -> Result<&Subtype, LookupError> {
        self.subtypes
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| LookupError::UnknownSubtype(name.to_string()))
    }

    /// Persisted entities in authoring order.
    pub fn persisted_entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|e| e.persist)
    }
}

///
/// TESTS
///
