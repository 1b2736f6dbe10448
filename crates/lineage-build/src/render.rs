//! Text rendering of the model document and its entity blocks.

use crate::{CompileError, naming, resolve::ResolutionStep, type_map};
use lineage_schema::{
    node::{DefaultValue, Entity, EntityProperty},
    types::{NamingMode, ScalarType, StorageType},
    version::Version,
};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;
const MODEL_ATTRIBUTES: &str = r#"type="com.apple.IDECoreDataModeler.DataModel" documentVersion="1.0" lastSavedToolsVersion="14460.32" systemVersion="18A391" minimumToolsVersion="Automatic" sourceLanguage="Swift""#;

const ENTITY_INDENT: &str = "    ";
const ATTRIBUTE_INDENT: &str = "        ";

/// Wrap rendered entity blocks in the model header and footer.
#[must_use]
pub fn document(current_version: Version, blocks: &[String]) -> String {
    format!(
        "{XML_DECLARATION}\n<model {MODEL_ATTRIBUTES} userDefinedModelVersionIdentifier=\"{}\">\n\n{}\n\n</model>\n",
        current_version.dot_description(),
        blocks.join("\n"),
    )
}

/// Render one stored shape of an entity from its step's own snapshot.
///
/// `renamed_from` is tried when the step's snapshot predates a rename and
/// only knows the entity by its previous name.
pub fn entity_block(
    step: &ResolutionStep<'_>,
    renamed_from: Option<&str>,
    naming: NamingMode,
) -> Result<String, CompileError> {
    let entity = step_entity(step, renamed_from)?;
    let descriptions = step.descriptions;
    let version = step.version;

    let identifier_type = type_map::identifier_storage_type(entity, descriptions)
        .map_err(|err| CompileError::entity(&entity.name, version, err))?;
    let internal_identifier_type = if entity.has_void_identifier() {
        StorageType::Integer64
    } else {
        StorageType::String
    };
    let element_id = step
        .previous_name
        .map(|name| format!(" elementID=\"{}\"", escape(name)))
        .unwrap_or_default();

    let mut lines = vec![format!(
        "{ENTITY_INDENT}<entity name=\"{}\" representedClassName=\"{}\" syncable=\"YES\" codeGenerationType=\"class\"{element_id}>",
        entity.store_name(version),
        entity.managed_class_name(version),
    )];

    // bookkeeping
    lines.push(attribute(format!(
        r#"name="_identifier" attributeType="{identifier_type}" usesScalarValueType="YES" syncable="YES" optional="YES""#
    )));
    lines.push(attribute(format!(
        r#"name="__identifier" attributeType="{internal_identifier_type}" usesScalarValueType="YES" syncable="YES" optional="YES""#
    )));
    lines.push(attribute(format!(
        r#"name="{}" attributeType="String" usesScalarValueType="YES" syncable="YES" optional="YES""#,
        naming::type_uid(naming)
    )));
    if entity.remote {
        lines.push(attribute(format!(
            r#"name="{}" attributeType="String" syncable="YES" optional="YES""#,
            naming::remote_synchronization_state(naming)
        )));
    }
    if entity.last_remote_read {
        lines.push(attribute(format!(
            r#"name="{}" attributeType="Date" syncable="YES" optional="NO""#,
            naming::last_remote_read(naming)
        )));
    }

    for property in entity.used_properties() {
        let storage = type_map::storage_type(&property.property_type, descriptions)
            .map_err(|err| CompileError::property(&entity.name, &property.name, version, err))?;

        property_attributes(property, storage, naming, &mut lines);
    }

    lines.push(format!("{ENTITY_INDENT}</entity>"));

    Ok(lines.join("\n"))
}

// The entity a step renders, looked up in the step's snapshot.
fn step_entity<'a>(
    step: &ResolutionStep<'a>,
    renamed_from: Option<&str>,
) -> Result<&'a Entity, CompileError> {
    step.descriptions.entity(step.entity_name).or_else(|err| {
        renamed_from
            .and_then(|name| step.descriptions.entity(name).ok())
            .ok_or_else(|| CompileError::entity(step.entity_name, step.version, err))
    })
}

// Attribute names follow the naming mode; `elementID`s keep the previous
// name verbatim.
fn property_attributes(
    property: &EntityProperty,
    storage: StorageType,
    naming: NamingMode,
    lines: &mut Vec<String>,
) {
    let name = naming::property_name(&property.name, naming);
    let previous = property
        .previous_name
        .as_deref()
        .map(escape);
    let element_id = |prefix: &str, suffix: &str| {
        previous
            .as_ref()
            .map(|previous| format!(" elementID=\"{prefix}{previous}{suffix}\""))
            .unwrap_or_default()
    };

    if property.is_singular_relationship() {
        // value, target type name and target type discriminator
        let type_uid = naming::type_uid_suffix(naming);
        lines.push(attribute(format!(
            r#"name="_{name}" optional="YES" attributeType="{storage}" syncable="YES"{}"#,
            element_id("_", "")
        )));
        lines.push(attribute(format!(
            r#"name="__{name}" optional="YES" attributeType="String" syncable="YES"{}"#,
            element_id("__", "")
        )));
        lines.push(attribute(format!(
            r#"name="__{name}{type_uid}" optional="YES" attributeType="String" syncable="YES"{}"#,
            element_id("__", type_uid)
        )));
    } else {
        let optional = if property.optional || property.extra {
            r#" optional="YES""#
        } else {
            ""
        };
        let scalar_value = if property.property_type.uses_scalar_value_type() {
            r#"usesScalarValueType="YES" "#
        } else {
            ""
        };
        let default = property
            .default_value
            .as_ref()
            .map(|value| {
                format!(
                    " {}=\"{}\"",
                    default_attribute_name(value),
                    escape(&default_literal(value))
                )
            })
            .unwrap_or_default();

        lines.push(attribute(format!(
            r#"name="_{name}"{optional} attributeType="{storage}" {scalar_value}syncable="YES"{}{default}"#,
            element_id("_", "")
        )));
    }

    if property.extra {
        lines.push(attribute(format!(
            r#"name="__{name}{}" optional="NO" attributeType="{}" usesScalarValueType="YES" syncable="YES" defaultValueString="0""#,
            naming::extra_flag_suffix(naming),
            ScalarType::Bool.storage_type(),
        )));
    }
}

fn attribute(body: String) -> String {
    format!("{ATTRIBUTE_INDENT}<attribute {body}/>")
}

/// Attribute that carries a default of this kind.
#[must_use]
pub const fn default_attribute_name(value: &DefaultValue) -> &'static str {
    if value.is_date() {
        "defaultDateTimeInterval"
    } else {
        "defaultValueString"
    }
}

/// Literal text of a default, before escaping.
#[must_use]
pub fn default_literal(value: &DefaultValue) -> String {
    match value {
        DefaultValue::Bool(value) => if *value { "1" } else { "0" }.to_string(),
        // Debug keeps a fractional part on whole numbers
        DefaultValue::Float(value) => format!("{value:?}"),
        DefaultValue::Int(value) => value.to_string(),
        DefaultValue::String(value) | DefaultValue::EnumCase(value) => value.clone(),
        DefaultValue::Date(date) => {
            #[expect(clippy::cast_precision_loss)]
            let seconds = date.timestamp_millis() as f64 / 1000.0;
            format!("{seconds:?}")
        }
        DefaultValue::CurrentDate => "0".to_string(),
        DefaultValue::Nil => "nil".to_string(),
    }
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }

    out
}

///
/// TESTS
///
