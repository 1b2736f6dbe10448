//! Mapping from schema property types to storage attribute types.
//!
//! A to-one relationship is stored as the target's identifier, so resolving
//! one can walk a chain of identifiers across entities. The walk keeps the
//! entities it has visited and fails on a revisit or past
//! `MAX_IDENTIFIER_DEPTH` hops.

use lineage_schema::{
    node::{
        Descriptions, Entity, Identifier, LookupError, PropertyType, Relationship, Subtype,
        SubtypeItems,
    },
    types::{Association, StorageType},
};
use thiserror::Error as ThisError;

/// Maximum number of entities an identifier chain may pass through.
pub const MAX_IDENTIFIER_DEPTH: usize = 32;

///
/// TypeError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum TypeError {
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("cannot persist identifier of entity '{0}'")]
    CannotPersistIdentifier(String),

    #[error("identifier of entity '{entity}' is cyclic: {}", .chain.join(" -> "))]
    IdentifierCycle { entity: String, chain: Vec<String> },

    #[error(
        "identifier chain starting at entity '{entity}' exceeds {} entities",
        MAX_IDENTIFIER_DEPTH
    )]
    IdentifierTooDeep { entity: String },
}

/// Storage type of a property value, resolved against one snapshot.
pub fn storage_type(
    property_type: &PropertyType,
    descriptions: &Descriptions,
) -> Result<StorageType, TypeError> {
    match property_type {
        PropertyType::Scalar(scalar) => Ok(scalar.storage_type()),
        PropertyType::Subtype(name) => Ok(subtype_storage_type(descriptions.subtype(name)?)),
        PropertyType::Relationship(relationship) => match relationship.association {
            Association::ToMany => Ok(StorageType::Binary),
            Association::ToOne => {
                let target = descriptions.entity(&relationship.entity_name)?;
                identifier_storage_type(target, descriptions)
            }
        },
        PropertyType::Array(_) => Ok(StorageType::Binary),
    }
}

/// Storage type of an entity's identifier, following to-one relationships.
pub fn identifier_storage_type(
    entity: &Entity,
    descriptions: &Descriptions,
) -> Result<StorageType, TypeError> {
    let mut visiting = Vec::new();

    resolve_identifier(entity, descriptions, &mut visiting)
}

#[must_use]
pub const fn subtype_storage_type(subtype: &Subtype) -> StorageType {
    match subtype.items {
        SubtypeItems::Cases(_) => StorageType::String,
        SubtypeItems::Options(_) => StorageType::Integer64,
        SubtypeItems::Properties(_) => StorageType::Binary,
    }
}

fn resolve_identifier<'a>(
    entity: &'a Entity,
    descriptions: &'a Descriptions,
    visiting: &mut Vec<&'a str>,
) -> Result<StorageType, TypeError> {
    if visiting.contains(&entity.name.as_str()) {
        let mut chain = visiting.iter().map(ToString::to_string).collect::<Vec<_>>();
        chain.push(entity.name.clone());

        return Err(TypeError::IdentifierCycle {
            entity: chain[0].clone(),
            chain,
        });
    }
    if visiting.len() >= MAX_IDENTIFIER_DEPTH {
        return Err(TypeError::IdentifierTooDeep {
            entity: visiting[0].to_string(),
        });
    }
    visiting.push(&entity.name);

    match &entity.identifier {
        Identifier::Property(name) => {
            let property = entity.property(name)?;

            match &property.property_type {
                PropertyType::Scalar(scalar) => Ok(scalar.storage_type()),
                PropertyType::Relationship(Relationship {
                    entity_name,
                    association: Association::ToOne,
                }) => {
                    let target = descriptions.entity(entity_name)?;
                    resolve_identifier(target, descriptions, visiting)
                }
                // identifiers can be neither nested nor repeating
                PropertyType::Relationship(_) | PropertyType::Array(_) | PropertyType::Subtype(_) => {
                    Err(TypeError::CannotPersistIdentifier(entity.name.clone()))
                }
            }
        }
        Identifier::Relationships { scalar_type, .. } | Identifier::ScalarType(scalar_type) => {
            Ok(scalar_type.storage_type())
        }
        Identifier::Void => Ok(StorageType::Integer64),
    }
}

///
/// TESTS
///
