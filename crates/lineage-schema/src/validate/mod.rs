//! Catalog validation orchestration and shared helpers.

pub mod history;
pub mod naming;

use crate::{catalog::Catalog, error::ErrorTree, node::Descriptions};

/// Run full catalog validation in a staged, deterministic order.
pub(crate) fn validate_catalog(catalog: &Catalog) -> Result<(), ErrorTree> {
    let mut errors = ErrorTree::new();

    // Phase 1: validate each snapshot on its own.
    for (version, descriptions) in catalog.iter() {
        errors.merge_at(version.to_string(), validate_descriptions(descriptions));
    }

    // Phase 2: enforce catalog-wide invariants.
    history::validate_history_versions(catalog, &mut errors);

    errors.result()
}

// Validate one snapshot; routes are entity or subtype names.
fn validate_descriptions(descriptions: &Descriptions) -> ErrorTree {
    let mut errors = ErrorTree::new();

    naming::validate_unique_names(descriptions, &mut errors);

    for entity in &descriptions.entities {
        let mut errs = ErrorTree::new();
        naming::validate_entity_names(entity, &mut errs);
        history::validate_entity_history(entity, &mut errs);
        history::validate_identifier(entity, &mut errs);

        errors.merge_at(entity.name.clone(), errs);
    }

    errors
}

///
/// TESTS
///
