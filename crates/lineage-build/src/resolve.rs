//! Version lineage resolution.
//!
//! An entity without model mappings has a single stored shape. An entity with
//! mappings is emitted once per boundary in `[added_at_version] + mappings`,
//! each boundary rendered from the snapshot that described it.

use crate::CompileError;
use lineage_schema::{
    catalog::Catalog,
    node::{Descriptions, Entity},
    version::Version,
};
use std::iter;
use tracing::debug;

///
/// ResolutionStep
///
/// One stored shape of an entity: the snapshot to render it from and the
/// version label it is emitted under.
///

#[derive(Clone, Copy, Debug)]
pub struct ResolutionStep<'a> {
    pub entity_name: &'a str,
    pub descriptions: &'a Descriptions,
    pub version: Version,
    pub previous_name: Option<&'a str>,
}

/// Resolve every stored shape of `entity`, oldest first.
///
/// `history_versions` is searched as a set; only versions earlier than the
/// following boundary and outside the boundary's own release qualify.
pub fn resolve<'a>(
    entity: &'a Entity,
    catalog: &'a Catalog,
    current_version: Version,
    history_versions: &[Version],
) -> Result<Vec<ResolutionStep<'a>>, CompileError> {
    let current = catalog.descriptions(current_version)?;

    let added_at = entity
        .added_at_version
        .ok_or_else(|| CompileError::MissingAddedAtVersion {
            entity: entity.name.clone(),
        })?;

    let Some(history) = &entity.model_mapping_history else {
        return Ok(vec![ResolutionStep {
            entity_name: &entity.name,
            descriptions: current,
            version: added_at,
            previous_name: entity.previous_name.as_deref(),
        }]);
    };

    // authored chronologically, so no sorting here
    let versions = iter::once(added_at)
        .chain(history.iter().map(|mapping| mapping.to))
        .collect::<Vec<_>>();

    let mut steps = Vec::with_capacity(versions.len());
    for (index, &version) in versions.iter().enumerate() {
        let snapshot_version = if version == current_version {
            version
        } else {
            let next = versions.get(index + 1).copied().unwrap_or(current_version);
            snapshot_version(&entity.name, version, next, added_at, history_versions)
        };

        debug!(
            entity = %entity.name,
            version = %version,
            snapshot = %snapshot_version,
            "resolved model mapping"
        );

        steps.push(ResolutionStep {
            entity_name: &entity.name,
            descriptions: catalog.descriptions(snapshot_version)?,
            version,
            previous_name: None,
        });
    }

    Ok(steps)
}

// Latest history version before `next` that is not a patch of `version`,
// falling back to `added_at` when none qualifies.
fn snapshot_version(
    entity_name: &str,
    version: Version,
    next: Version,
    added_at: Version,
    history_versions: &[Version],
) -> Version {
    history_versions
        .iter()
        .copied()
        .filter(|candidate| *candidate < next && !Version::is_matching_release(*candidate, version))
        .max()
        .unwrap_or_else(|| {
            debug!(
                entity = %entity_name,
                version = %version,
                next = %next,
                "no qualifying history version, using added_at_version snapshot"
            );
            added_at
        })
}

///
/// TESTS
///
