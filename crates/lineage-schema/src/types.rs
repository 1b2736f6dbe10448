use derive_more::{Display, FromStr};
use serde::{Deserialize, Serialize};

///
/// ScalarType
///

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, FromStr, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(rename_all = "snake_case")]
#[remain::sorted]
pub enum ScalarType {
    Bool,
    Color,
    Date,
    Double,
    Float,
    Int,
    Milliseconds,
    Seconds,
    String,
    Url,
}

impl ScalarType {
    /// Every scalar type, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::Bool,
        Self::Color,
        Self::Date,
        Self::Double,
        Self::Float,
        Self::Int,
        Self::Milliseconds,
        Self::Seconds,
        Self::String,
        Self::Url,
    ];

    /// Storage type used to persist a value of this scalar type.
    #[must_use]
    pub const fn storage_type(self) -> StorageType {
        match self {
            Self::String | Self::Url | Self::Color => StorageType::String,
            Self::Int | Self::Bool => StorageType::Integer64,
            Self::Double | Self::Seconds | Self::Milliseconds => StorageType::Double,
            Self::Float => StorageType::Float,
            Self::Date => StorageType::Date,
        }
    }

    // numeric and boolean values are stored unboxed
    #[must_use]
    pub const fn uses_scalar_value_type(self) -> bool {
        matches!(
            self,
            Self::Int | Self::Bool | Self::Double | Self::Float | Self::Seconds | Self::Milliseconds
        )
    }
}

///
/// StorageType
///
/// The closed vocabulary of attribute types the model format accepts.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum StorageType {
    #[display("String")]
    String,

    #[display("Integer 64")]
    Integer64,

    #[display("Double")]
    Double,

    #[display("Float")]
    Float,

    #[display("Date")]
    Date,

    #[display("Binary")]
    Binary,
}

///
/// Association
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Display, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Association {
    #[default]
    ToOne,
    ToMany,
}

///
/// NamingMode
///
/// Selects the spelling of generated attribute names. `Legacy` keeps
/// camelCase (`__typeUID`), `Current` uses snake_case (`__type_uid`).
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Display, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NamingMode {
    Legacy,

    #[default]
    Current,
}

impl NamingMode {
    #[must_use]
    pub const fn is_legacy(self) -> bool {
        matches!(self, Self::Legacy)
    }
}

///
/// TESTS
///
