use crate::{
    node::DefaultValue,
    types::{Association, ScalarType},
};
use serde::{Deserialize, Serialize};
use std::ops::Not;

///
/// PropertyType
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    Scalar(ScalarType),
    Array(Box<Self>),
    Subtype(String),
    Relationship(Relationship),
}

impl PropertyType {
    #[must_use]
    pub fn array(element: Self) -> Self {
        Self::Array(Box::new(element))
    }

    #[must_use]
    pub fn to_one(entity_name: impl Into<String>) -> Self {
        Self::Relationship(Relationship::new(entity_name, Association::ToOne))
    }

    #[must_use]
    pub fn to_many(entity_name: impl Into<String>) -> Self {
        Self::Relationship(Relationship::new(entity_name, Association::ToMany))
    }

    #[must_use]
    pub const fn uses_scalar_value_type(&self) -> bool {
        match self {
            Self::Scalar(scalar) => scalar.uses_scalar_value_type(),
            Self::Array(_) | Self::Subtype(_) | Self::Relationship(_) => false,
        }
    }
}

///
/// Relationship
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Relationship {
    pub entity_name: String,

    #[serde(default)]
    pub association: Association,
}

impl Relationship {
    #[must_use]
    pub fn new(entity_name: impl Into<String>, association: Association) -> Self {
        Self {
            entity_name: entity_name.into(),
            association,
        }
    }
}

///
/// EntityProperty
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct EntityProperty {
    pub name: String,
    pub property_type: PropertyType,

    #[serde(default, skip_serializing_if = "Not::not")]
    pub optional: bool,

    #[serde(default, skip_serializing_if = "Not::not")]
    pub extra: bool,

    #[serde(default, skip_serializing_if = "Not::not")]
    pub unused: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<DefaultValue>,
}

impl EntityProperty {
    #[must_use]
    pub fn new(name: impl Into<String>, property_type: PropertyType) -> Self {
        Self {
            name: name.into(),
            property_type,
            optional: false,
            extra: false,
            unused: false,
            previous_name: None,
            default_value: None,
        }
    }

    #[must_use]
    pub fn scalar(name: impl Into<String>, scalar: ScalarType) -> Self {
        Self::new(name, PropertyType::Scalar(scalar))
    }

    #[must_use]
    pub fn with_optional(mut self) -> Self {
        self.optional = true;
        self
    }

    #[must_use]
    pub fn with_extra(mut self) -> Self {
        self.extra = true;
        self
    }

    #[must_use]
    pub fn with_unused(mut self) -> Self {
        self.unused = true;
        self
    }

    #[must_use]
    pub fn with_previous_name(mut self, name: impl Into<String>) -> Self {
        self.previous_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_default(mut self, value: DefaultValue) -> Self {
        self.default_value = Some(value);
        self
    }

    /// True for a to-one relationship, which persists as a reference plus its
    /// target's type information rather than as a single value.
    #[must_use]
    pub const fn is_singular_relationship(&self) -> bool {
        matches!(
            &self.property_type,
            PropertyType::Relationship(Relationship {
                association: Association::ToOne,
                ..
            })
        )
    }
}

///
/// TESTS
///
