//! ## Crate layout
//! - `build`: the model compiler, version resolver, type mapper and sinks.
//! - `config`: `CompilerConfig` and its TOML loader.
//! - `schema`: the versioned catalog data model and its validation.
//!
//! `generate` is the driver entry point: it reads a config file, takes the
//! target version from it and writes the model into a directory.

pub use lineage_build as build;
pub use lineage_config_build as config;
pub use lineage_schema as schema;

use crate::{
    build::{Artifact, CompileError, ModelCompiler, sink::DirectorySink},
    config::{CompilerConfig, ConfigError},
    schema::catalog::Catalog,
};
use std::path::Path;
use thiserror::Error as ThisError;
use tracing::info;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error("config does not set current_version")]
    MissingCurrentVersion,
}

/// Load `config_path` and write the model for its `current_version` into
/// `directory`.
pub fn generate(
    catalog: &Catalog,
    config_path: impl AsRef<Path>,
    directory: impl AsRef<Path>,
) -> Result<Artifact, Error> {
    let config = CompilerConfig::load(config_path.as_ref())?;
    let current_version = config.current_version.ok_or(Error::MissingCurrentVersion)?;
    info!(
        config = %config_path.as_ref().display(),
        version = %current_version,
        "loaded compiler config"
    );

    let artifact = ModelCompiler::new(catalog, config).generate(
        current_version,
        &mut DirectorySink,
        directory.as_ref(),
    )?;

    Ok(artifact)
}

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        build::{Artifact, CompileError, ModelCompiler, compile, sink::OutputSink},
        config::CompilerConfig,
    };
    pub use lineage_schema::prelude::*;
}

///
/// TESTS
///
