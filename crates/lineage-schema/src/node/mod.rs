mod default_value;
mod descriptions;
mod entity;
mod identifier;
mod property;
mod subtype;

pub use default_value::*;
pub use descriptions::*;
pub use entity::*;
pub use identifier::*;
pub use property::*;
pub use subtype::*;

use thiserror::Error as ThisError;

///
/// LookupError
///
/// A reference inside one description snapshot that the same snapshot
/// cannot resolve.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum LookupError {
    #[error("unknown entity '{0}'")]
    UnknownEntity(String),

    #[error("entity '{entity}' has no property '{property}'")]
    UnknownProperty { entity: String, property: String },

    #[error("unknown subtype '{0}'")]
    UnknownSubtype(String),
}
