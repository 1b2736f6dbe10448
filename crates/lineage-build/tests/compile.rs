use lineage_build::{
    CompileError, ModelCompiler, compile,
    sink::{DirectorySink, MemorySink},
    type_map::TypeError,
};
use lineage_config_build::CompilerConfig;
use lineage_schema::prelude::*;
use std::{fs, path::Path};

const V1: Version = Version::new(1, 0, 0);
const V1_1: Version = Version::new(1, 1, 0);
const V2: Version = Version::new(2, 0, 0);

const MOVIE_DOCUMENT: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<model type="com.apple.IDECoreDataModeler.DataModel" documentVersion="1.0" lastSavedToolsVersion="14460.32" systemVersion="18A391" minimumToolsVersion="Automatic" sourceLanguage="Swift" userDefinedModelVersionIdentifier="1.0.0">

    <entity name="Movie_1_0_0" representedClassName="ManagedMovie_1_0_0" syncable="YES" codeGenerationType="class">
        <attribute name="_identifier" attributeType="Integer 64" usesScalarValueType="YES" syncable="YES" optional="YES"/>
        <attribute name="__identifier" attributeType="Integer 64" usesScalarValueType="YES" syncable="YES" optional="YES"/>
        <attribute name="__type_uid" attributeType="String" usesScalarValueType="YES" syncable="YES" optional="YES"/>
        <attribute name="_title" attributeType="String" syncable="YES"/>
    </entity>

</model>
"#;

fn snapshot(entities: Vec<Entity>) -> Descriptions {
    Descriptions::new(entities, Vec::new())
}

fn movie_catalog() -> Catalog {
    let movie = Entity::new("Movie", Identifier::Void)
        .with_persist(V1)
        .with_property(EntityProperty::scalar("title", ScalarType::String));

    Catalog::new([(V1, snapshot(vec![movie]))].into(), Vec::new())
}

// Category at 1.0.0, checkpointed at 1.1.0, renamed to Genre at 2.0.0
fn genre_catalog() -> Catalog {
    let category = Entity::new("Category", Identifier::property("id"))
        .with_persist(V1)
        .with_property(EntityProperty::scalar("id", ScalarType::String))
        .with_property(EntityProperty::scalar("title", ScalarType::String));
    let category_1_1 = category
        .clone()
        .with_property(EntityProperty::scalar("sortOrder", ScalarType::Int).with_optional());
    let genre = Entity::new("Genre", Identifier::property("id"))
        .with_persist(V1)
        .with_previous_name("Category")
        .with_mapping_to(V2)
        .with_property(EntityProperty::scalar("id", ScalarType::String))
        .with_property(
            EntityProperty::scalar("displayName", ScalarType::String).with_previous_name("title"),
        );

    Catalog::new(
        [
            (V1, snapshot(vec![category])),
            (V1_1, snapshot(vec![category_1_1])),
            (V2, snapshot(vec![genre])),
        ]
        .into(),
        vec![V1_1, V1],
    )
}

fn entity_lines(document: &str) -> Vec<&str> {
    document
        .lines()
        .filter(|line| line.trim_start().starts_with("<entity "))
        .collect()
}

#[test]
fn movie_document_is_exact() {
    let artifact = compile(&movie_catalog(), V1, &CompilerConfig::default()).unwrap();

    assert_eq!(artifact.name, "contents");
    assert_eq!(artifact.content, MOVIE_DOCUMENT);
}

#[test]
fn renamed_entity_keeps_its_old_shape() {
    let artifact = compile(&genre_catalog(), V2, &CompilerConfig::default()).unwrap();
    let entities = entity_lines(&artifact.content);

    // old shape first, from the 1.1.0 checkpoint
    assert_eq!(entities.len(), 2);
    assert!(entities[0].contains(r#"name="Category_1_0_0""#));
    assert!(entities[1].contains(r#"name="Genre_2_0_0""#));
    assert!(!entities[1].contains("elementID"));

    let (old, new) = artifact
        .content
        .split_once(entities[1])
        .unwrap();
    assert!(old.contains(r#"name="_sort_order" optional="YES" attributeType="Integer 64""#));
    assert!(old.contains(r#"<attribute name="_title" attributeType="String" syncable="YES"/>"#));
    assert!(new.contains(
        r#"<attribute name="_display_name" attributeType="String" syncable="YES" elementID="_title"/>"#
    ));
    assert!(!new.contains("sort_order"));
}

#[test]
fn legacy_naming_applies_to_attributes_only() {
    let entity = Entity::new("movie_genre", Identifier::ScalarType(ScalarType::String))
        .with_persist(V1)
        .with_remote()
        .with_property(EntityProperty::scalar("release_date", ScalarType::Date).with_extra());
    let catalog = Catalog::new([(V1, snapshot(vec![entity]))].into(), Vec::new());
    let config = CompilerConfig::default().with_naming(NamingMode::Legacy);

    let content = compile(&catalog, V1, &config).unwrap().content;

    assert!(content.contains(r#"<entity name="MovieGenre_1_0_0" representedClassName="ManagedMovieGenre_1_0_0""#));
    assert!(content.contains(r#"name="__typeUID""#));
    assert!(content.contains(r#"name="_remoteSynchronizationState""#));
    assert!(content.contains(r#"<attribute name="_releaseDate" optional="YES" attributeType="Date" syncable="YES"/>"#));
    assert!(content.contains(r#"name="__releaseDateExtraFlag""#));
    assert!(!content.contains("release_date"));
}

#[test]
fn catalog_order_is_output_order() {
    let entities = ["Zebra", "Apple", "Mango"]
        .into_iter()
        .map(|name| Entity::new(name, Identifier::Void).with_persist(V1))
        .collect();
    let catalog = Catalog::new([(V1, snapshot(entities))].into(), Vec::new());

    let content = compile(&catalog, V1, &CompilerConfig::default()).unwrap().content;
    let names = entity_lines(&content)
        .iter()
        .map(|line| line.trim_start().split('"').nth(1).unwrap())
        .collect::<Vec<_>>();

    assert_eq!(names, vec!["Zebra_1_0_0", "Apple_1_0_0", "Mango_1_0_0"]);
}

#[test]
fn output_is_deterministic() {
    let catalog = genre_catalog();
    let config = CompilerConfig::default();

    assert_eq!(
        compile(&catalog, V2, &config).unwrap(),
        compile(&catalog, V2, &config).unwrap()
    );
}

#[test]
fn catalog_loads_from_json() {
    let json = r#"{
        "descriptions": {
            "1.0.0": {
                "entities": [{
                    "name": "Movie",
                    "persist": true,
                    "identifier": "void",
                    "added_at_version": "1.0.0",
                    "properties": [
                        { "name": "title", "property_type": { "scalar": "string" } }
                    ]
                }]
            }
        }
    }"#;
    let catalog: Catalog = serde_json::from_str(json).unwrap();

    let artifact = compile(&catalog, V1, &CompilerConfig::default()).unwrap();
    assert_eq!(artifact.content, MOVIE_DOCUMENT);
}

#[test]
fn invalid_identifier_aborts_without_output() {
    let entity = Entity::new("Poster", Identifier::property("tags"))
        .with_persist(V1)
        .with_property(EntityProperty::new(
            "tags",
            PropertyType::array(PropertyType::Scalar(ScalarType::String)),
        ));
    let catalog = Catalog::new([(V1, snapshot(vec![entity]))].into(), Vec::new());
    let mut sink = MemorySink::new();

    let err = ModelCompiler::new(&catalog, CompilerConfig::default())
        .generate(V1, &mut sink, Path::new("out"))
        .unwrap_err();

    assert!(matches!(
        err.type_error(),
        Some(TypeError::CannotPersistIdentifier(entity)) if entity == "Poster"
    ));
    assert!(sink.files.is_empty());
}

#[test]
fn validation_reports_every_problem() {
    let broken = Entity::new("Broken", Identifier::property("missing")).with_persist(V1);
    let unmapped = Entity::new("", Identifier::Void).with_persist(V1);
    let catalog = Catalog::new(
        [(V1, snapshot(vec![broken, unmapped]))].into(),
        vec![V1_1],
    );

    let err = compile(&catalog, V1, &CompilerConfig::default()).unwrap_err();
    let CompileError::Validation(tree) = err else {
        panic!("expected a validation error");
    };

    assert!(tree.len() >= 3, "{tree}");
}

#[test]
fn config_file_drives_generation() {
    let root = tempfile::tempdir().unwrap();
    let config_path = root.path().join("lineage.toml");
    fs::write(
        &config_path,
        "[model]\nnaming = \"legacy\"\nartifact_name = \"model.xml\"\n",
    )
    .unwrap();
    let config = CompilerConfig::load(&config_path).unwrap();
    let directory = root.path().join("Model.xcdatamodeld").join("Model 1.0.0.xcdatamodel");

    let catalog = movie_catalog();
    ModelCompiler::new(&catalog, config)
        .generate(V1, &mut DirectorySink, &directory)
        .unwrap();

    let written = fs::read_to_string(directory.join("model.xml")).unwrap();
    assert!(written.contains(r#"name="__typeUID""#));
    assert!(written.ends_with("</model>\n"));
}
