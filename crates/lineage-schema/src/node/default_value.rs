use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

///
/// DefaultValue
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultValue {
    Bool(bool),
    Float(f64),
    Int(i64),
    String(String),
    Date(DateTime<Utc>),
    EnumCase(String),
    CurrentDate,
    Nil,
}

impl DefaultValue {
    /// Whether the value is a point in time rather than a plain literal.
    #[must_use]
    pub const fn is_date(&self) -> bool {
        match self {
            Self::Date(_) | Self::CurrentDate => true,
            Self::Bool(_)
            | Self::Float(_)
            | Self::Int(_)
            | Self::String(_)
            | Self::EnumCase(_)
            | Self::Nil => false,
        }
    }
}
