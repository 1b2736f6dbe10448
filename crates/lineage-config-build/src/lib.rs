//! Compiler configuration, read from the `[model]` table of a TOML file.
//!
//! ```toml
//! [model]
//! naming = "legacy"
//! artifact_name = "contents"
//! validate = true
//! current_version = "2.0.0"
//! history_versions = ["1.1.0", "1.0.0"]
//! ```

use lineage_schema::{types::NamingMode, version::Version};
use serde::{Deserialize, Serialize};
use std::{fs, io, path::Path};
use thiserror::Error as ThisError;

/// Artifact name used when the configuration does not set one.
pub const DEFAULT_ARTIFACT_NAME: &str = "contents";

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

///
/// ConfigFile
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    model: CompilerConfig,
}

///
/// CompilerConfig
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CompilerConfig {
    /// Spelling of generated attribute names.
    #[serde(default)]
    pub naming: NamingMode,

    /// Name of the written artifact.
    #[serde(default = "default_artifact_name")]
    pub artifact_name: String,

    /// Validate the catalog before compiling.
    #[serde(default = "default_true")]
    pub validate: bool,

    /// Target version for driver tools; the compiler takes it as an argument.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_version: Option<Version>,

    /// Migration checkpoints for driver tools that assemble the catalog.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub history_versions: Vec<Version>,
}

fn default_artifact_name() -> String {
    DEFAULT_ARTIFACT_NAME.to_string()
}

const fn default_true() -> bool {
    true
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            naming: NamingMode::default(),
            artifact_name: default_artifact_name(),
            validate: true,
            current_version: None,
            history_versions: Vec::new(),
        }
    }
}

impl CompilerConfig {
    #[must_use]
    pub fn with_naming(mut self, naming: NamingMode) -> Self {
        self.naming = naming;
        self
    }

    #[must_use]
    pub fn with_validate(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// Parse a TOML document; a missing `[model]` table yields the defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(s)?;
        let config = file.model;
        config.check()?;

        Ok(config)
    }

    /// Load and parse a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;

        Self::from_toml_str(&content)
    }

    fn check(&self) -> Result<(), ConfigError> {
        let name = self.artifact_name.trim();
        if name.is_empty() {
            return Err(ConfigError::Invalid("artifact_name is empty".to_string()));
        }
        if name.contains(['/', '\\']) {
            return Err(ConfigError::Invalid(format!(
                "artifact_name '{name}' must be a file name, not a path"
            )));
        }

        Ok(())
    }
}

///
/// TESTS
///
