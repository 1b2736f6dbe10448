use crate::node::PropertyType;
use serde::{Deserialize, Serialize};
use std::ops::Not;

///
/// Subtype
///
/// A named value type that is not an entity: a closed set of cases, a set of
/// option flags, or a nested structure.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Subtype {
    pub name: String,
    pub items: SubtypeItems,
}

impl Subtype {
    #[must_use]
    pub fn new(name: impl Into<String>, items: SubtypeItems) -> Self {
        Self {
            name: name.into(),
            items,
        }
    }

    #[must_use]
    pub fn cases<I, S>(name: impl Into<String>, cases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            name,
            SubtypeItems::Cases(cases.into_iter().map(Into::into).collect()),
        )
    }

    #[must_use]
    pub fn options<I, S>(name: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            name,
            SubtypeItems::Options(options.into_iter().map(Into::into).collect()),
        )
    }

    #[must_use]
    pub fn properties(name: impl Into<String>, properties: Vec<SubtypeProperty>) -> Self {
        Self::new(name, SubtypeItems::Properties(properties))
    }
}

///
/// SubtypeItems
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubtypeItems {
    Cases(Vec<String>),
    Options(Vec<String>),
    Properties(Vec<SubtypeProperty>),
}

///
/// SubtypeProperty
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SubtypeProperty {
    pub name: String,
    pub property_type: PropertyType,

    #[serde(default, skip_serializing_if = "Not::not")]
    pub optional: bool,
}

impl SubtypeProperty {
    #[must_use]
    pub fn new(name: impl Into<String>, property_type: PropertyType) -> Self {
        Self {
            name: name.into(),
            property_type,
            optional: false,
        }
    }
}
