use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error as ThisError;

///
/// VersionParseError
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum VersionParseError {
    #[error("version string is empty")]
    Empty,

    #[error("version '{0}' must have two or three dot-separated components")]
    ComponentCount(String),

    #[error("version '{version}' has a non-numeric component '{component}'")]
    InvalidComponent { version: String, component: String },
}

///
/// Version
///
/// A released schema version. Ordering is lexicographic over
/// `(major, minor, patch)`; the canonical string form is dotted.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    #[must_use]
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Two versions belong to the same release when only the patch differs.
    #[must_use]
    pub const fn is_matching_release(lhs: Self, rhs: Self) -> bool {
        lhs.major == rhs.major && lhs.minor == rhs.minor
    }

    /// Dotted form, eg. `1.2.3`.
    #[must_use]
    pub fn dot_description(self) -> String {
        self.to_string()
    }

    /// Identifier-safe form, eg. `1_2_3`.
    #[must_use]
    pub fn sql_description(self) -> String {
        format!("{}_{}_{}", self.major, self.minor, self.patch)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(VersionParseError::Empty);
        }

        let parts = s.split('.').collect::<Vec<_>>();
        if !(2..=3).contains(&parts.len()) {
            return Err(VersionParseError::ComponentCount(s.to_string()));
        }

        let component = |part: &str| {
            part.parse::<u32>()
                .map_err(|_| VersionParseError::InvalidComponent {
                    version: s.to_string(),
                    component: part.to_string(),
                })
        };

        let major = component(parts[0])?;
        let minor = component(parts[1])?;
        let patch = match parts.get(2) {
            Some(part) => component(part)?,
            None => 0,
        };

        Ok(Self::new(major, minor, patch))
    }
}

impl TryFrom<String> for Version {
    type Error = VersionParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Version> for String {
    fn from(version: Version) -> Self {
        version.to_string()
    }
}

///
/// TESTS
///
