use crate::{
    catalog::Catalog,
    err,
    error::ErrorTree,
    node::{Entity, Identifier},
};

/// A persisted entity needs `added_at_version`, and its mapping history must
/// move strictly forward from there.
pub fn validate_entity_history(entity: &Entity, errs: &mut ErrorTree) {
    let Some(added_at) = entity.added_at_version else {
        if entity.persist {
            err!(errs, "persisted entity '{}' has no added_at_version", entity.name);
        }
        return;
    };

    let Some(history) = &entity.model_mapping_history else {
        return;
    };

    let mut previous = added_at;
    for mapping in history {
        if mapping.to <= previous {
            err!(
                errs,
                "model mapping to {} must be later than {}",
                mapping.to,
                previous
            );
        }
        previous = previous.max(mapping.to);
    }
}

/// A property identifier must name one of the entity's declared properties.
pub fn validate_identifier(entity: &Entity, errs: &mut ErrorTree) {
    if let Identifier::Property(name) = &entity.identifier
        && entity.property(name).is_err()
    {
        err!(errs, "identifier refers to unknown property '{name}'");
    }
}

/// Every history checkpoint must have a snapshot to render from.
pub fn validate_history_versions(catalog: &Catalog, errs: &mut ErrorTree) {
    for version in catalog.history_versions() {
        if !catalog.contains(*version) {
            err!(errs, "history version {version} has no descriptions");
        }
    }
}
