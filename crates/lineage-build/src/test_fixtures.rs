use lineage_schema::prelude::*;

pub(crate) const V1: Version = Version::new(1, 0, 0);
pub(crate) const V1_1: Version = Version::new(1, 1, 0);
pub(crate) const V2: Version = Version::new(2, 0, 0);
pub(crate) const V3: Version = Version::new(3, 0, 0);

pub(crate) fn movie() -> Entity {
    Entity::new("Movie", Identifier::property("id"))
        .with_persist(V1)
        .with_property(EntityProperty::scalar("id", ScalarType::Int))
        .with_property(EntityProperty::scalar("title", ScalarType::String))
}

/// One snapshot with a single `Movie` entity.
pub(crate) fn movie_catalog() -> Catalog {
    Catalog::new(
        [(V1, Descriptions::new(vec![movie()], Vec::new()))].into(),
        Vec::new(),
    )
}

/// `Category` at 1.0.0 becomes `Genre` at 2.0.0.
pub(crate) fn genre_catalog() -> Catalog {
    let category = Entity::new("Category", Identifier::property("id"))
        .with_persist(V1)
        .with_property(EntityProperty::scalar("id", ScalarType::String))
        .with_property(EntityProperty::scalar("title", ScalarType::String));

    let genre = Entity::new("Genre", Identifier::property("id"))
        .with_persist(V1)
        .with_previous_name("Category")
        .with_mapping_to(V2)
        .with_property(EntityProperty::scalar("id", ScalarType::String))
        .with_property(EntityProperty::scalar("name", ScalarType::String).with_previous_name("title"));

    Catalog::new(
        [
            (V1, Descriptions::new(vec![category], Vec::new())),
            (V2, Descriptions::new(vec![genre], Vec::new())),
        ]
        .into(),
        vec![V1],
    )
}

/// `Review` is identified by its `Screening`, which is identified by its
/// `Movie`, whose identifier is a double.
pub(crate) fn identifier_chain_snapshot() -> Descriptions {
    Descriptions::new(
        vec![
            Entity::new("Review", Identifier::property("screening"))
                .with_property(EntityProperty::new("screening", PropertyType::to_one("Screening"))),
            Entity::new("Screening", Identifier::property("movie"))
                .with_property(EntityProperty::new("movie", PropertyType::to_one("Movie"))),
            Entity::new("Movie", Identifier::property("id"))
                .with_property(EntityProperty::scalar("id", ScalarType::Double)),
        ],
        Vec::new(),
    )
}

/// `Left` and `Right` identify each other.
pub(crate) fn identifier_cycle_snapshot() -> Descriptions {
    Descriptions::new(
        vec![
            Entity::new("Left", Identifier::property("right"))
                .with_property(EntityProperty::new("right", PropertyType::to_one("Right"))),
            Entity::new("Right", Identifier::property("left"))
                .with_property(EntityProperty::new("left", PropertyType::to_one("Left"))),
        ],
        Vec::new(),
    )
}
