use crate::{
    node::{EntityProperty, Identifier, LookupError},
    version::Version,
};
use convert_case::{Case, Casing};
use serde::{Deserialize, Serialize};
use std::ops::Not;

///
/// ModelMapping
///
/// A version at which the entity's stored shape changed and the previous
/// shape has to be kept around for migration.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ModelMapping {
    pub to: Version,
}

impl ModelMapping {
    #[must_use]
    pub const fn new(to: Version) -> Self {
        Self { to }
    }
}

///
/// Entity
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Entity {
    pub name: String,

    #[serde(default, skip_serializing_if = "Not::not")]
    pub persist: bool,

    #[serde(default, skip_serializing_if = "Not::not")]
    pub remote: bool,

    #[serde(default, skip_serializing_if = "Not::not")]
    pub last_remote_read: bool,

    #[serde(default)]
    pub identifier: Identifier,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_at_version: Option<Version>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_mapping_history: Option<Vec<ModelMapping>>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<EntityProperty>,
}

impl Entity {
    #[must_use]
    pub fn new(name: impl Into<String>, identifier: Identifier) -> Self {
        Self {
            name: name.into(),
            persist: false,
            remote: false,
            last_remote_read: false,
            identifier,
            added_at_version: None,
            previous_name: None,
            model_mapping_history: None,
            properties: Vec::new(),
        }
    }

    /// Mark the entity as persisted since `version`.
    #[must_use]
    pub fn with_persist(mut self, added_at: Version) -> Self {
        self.persist = true;
        self.added_at_version = Some(added_at);
        self
    }

    #[must_use]
    pub fn with_remote(mut self) -> Self {
        self.remote = true;
        self
    }

    #[must_use]
    pub fn with_last_remote_read(mut self) -> Self {
        self.last_remote_read = true;
        self
    }

    #[must_use]
    pub fn with_previous_name(mut self, name: impl Into<String>) -> Self {
        self.previous_name = Some(name.into());
        self
    }

    /// Append a model mapping; history is kept in authoring order.
    #[must_use]
    pub fn with_mapping_to(mut self, to: Version) -> Self {
        self.model_mapping_history
            .get_or_insert_with(Vec::new)
            .push(ModelMapping::new(to));
        self
    }

    #[must_use]
    pub fn with_property(mut self, property: EntityProperty) -> Self {
        self.properties.push(property);
        self
    }

    pub fn property(&self, name: &str) -> Result<&EntityProperty, LookupError> {
        self.properties
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| LookupError::UnknownProperty {
                entity: self.name.clone(),
                property: name.to_string(),
            })
    }

    /// Properties that are actually stored; `unused` ones are declared only.
    pub fn used_properties(&self) -> impl Iterator<Item = &EntityProperty> {
        self.properties.iter().filter(|p| !p.unused)
    }

    #[must_use]
    pub const fn has_void_identifier(&self) -> bool {
        self.identifier.is_void()
    }

    /// Name of the stored entity for one version, eg. `MovieGenre_1_0_0`.
    #[must_use]
    pub fn store_name(&self, version: Version) -> String {
        format!(
            "{}_{}",
            self.name.to_case(Case::Pascal),
            version.sql_description()
        )
    }

    /// Name of the class that backs the stored entity for one version.
    #[must_use]
    pub fn managed_class_name(&self, version: Version) -> String {
        format!("Managed{}", self.store_name(version))
    }
}

///
/// TESTS
///
