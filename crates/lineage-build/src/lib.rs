//! Model compiler: turns a versioned schema catalog into one persistence-model
//! document that keeps every historical stored shape of every entity.

mod error;
pub mod naming;
pub mod render;
pub mod resolve;
pub mod sink;
pub mod type_map;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use error::CompileError;

use crate::sink::OutputSink;
use lineage_config_build::CompilerConfig;
use lineage_schema::{catalog::Catalog, version::Version};
use std::path::Path;
use tracing::{debug, info, info_span};

///
/// Artifact
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Artifact {
    pub name: String,
    pub content: String,
}

///
/// ModelCompiler
///

pub struct ModelCompiler<'a> {
    pub catalog: &'a Catalog,
    pub config: CompilerConfig,
}

impl<'a> ModelCompiler<'a> {
    #[must_use]
    pub const fn new(catalog: &'a Catalog, config: CompilerConfig) -> Self {
        Self { catalog, config }
    }

    /// Build the model document for `current_version`.
    ///
    /// Entities are emitted in catalog order, each expanded into one block per
    /// resolved step. The first failure aborts the run.
    pub fn compile(&self, current_version: Version) -> Result<Artifact, CompileError> {
        let span = info_span!("compile", version = %current_version);
        let _enter = span.enter();

        if self.config.validate {
            self.catalog.validate().map_err(CompileError::Validation)?;
        }

        let descriptions = self.catalog.descriptions(current_version)?;
        let history_versions = self.history_versions();
        let mut blocks = Vec::new();

        for entity in descriptions.persisted_entities() {
            let steps =
                resolve::resolve(entity, self.catalog, current_version, history_versions)?;
            debug!(entity = %entity.name, steps = steps.len(), "rendering entity");

            for step in &steps {
                blocks.push(render::entity_block(
                    step,
                    entity.previous_name.as_deref(),
                    self.config.naming,
                )?);
            }
        }

        info!(blocks = blocks.len(), "compiled model");

        Ok(Artifact {
            name: self.config.artifact_name.clone(),
            content: render::document(current_version, &blocks),
        })
    }

    // configured checkpoints replace the catalog's own list
    fn history_versions(&self) -> &[Version] {
        if self.config.history_versions.is_empty() {
            self.catalog.history_versions()
        } else {
            &self.config.history_versions
        }
    }

    /// Compile, then hand the artifact to `sink` once.
    pub fn generate(
        &self,
        current_version: Version,
        sink: &mut dyn OutputSink,
        directory: &Path,
    ) -> Result<Artifact, CompileError> {
        let artifact = self.compile(current_version)?;
        sink.write(&artifact.name, &artifact.content, directory)?;

        info!(
            artifact = %artifact.name,
            directory = %directory.display(),
            "generated model"
        );

        Ok(artifact)
    }
}

/// Compile `catalog` at `current_version` with `config`.
pub fn compile(
    catalog: &Catalog,
    current_version: Version,
    config: &CompilerConfig,
) -> Result<Artifact, CompileError> {
    ModelCompiler::new(catalog, config.clone()).compile(current_version)
}

///
/// TESTS
///
