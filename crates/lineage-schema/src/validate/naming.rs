use crate::{
    err,
    error::ErrorTree,
    node::{Descriptions, Entity},
};
use std::collections::BTreeSet;

/// Entity and subtype names must each be unique within a snapshot.
pub fn validate_unique_names(descriptions: &Descriptions, errs: &mut ErrorTree) {
    let mut entities = BTreeSet::new();
    for entity in &descriptions.entities {
        if !entities.insert(entity.name.as_str()) {
            err!(errs, "duplicate entity name '{}'", entity.name);
        }
    }

    let mut subtypes = BTreeSet::new();
    for subtype in &descriptions.subtypes {
        if !subtypes.insert(subtype.name.as_str()) {
            err!(errs, "duplicate subtype name '{}'", subtype.name);
        }
    }
}

/// Entity and property names must be non-empty ASCII.
pub fn validate_entity_names(entity: &Entity, errs: &mut ErrorTree) {
    if let Err(msg) = validate_name("entity", &entity.name) {
        errs.add(msg);
    }

    let mut seen = BTreeSet::new();
    for property in &entity.properties {
        if let Err(msg) = validate_name("property", &property.name) {
            errs.add(msg);
        }
        if !seen.insert(property.name.as_str()) {
            err!(errs, "duplicate property name '{}'", property.name);
        }
    }
}

fn validate_name(kind: &str, name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err(format!("{kind} name is empty"));
    }
    if !name.is_ascii() {
        return Err(format!("{kind} name '{name}' must be ASCII"));
    }

    Ok(())
}
