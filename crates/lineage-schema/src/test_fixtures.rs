use crate::prelude::*;

pub(crate) const V1: Version = Version::new(1, 0, 0);
pub(crate) const V2: Version = Version::new(2, 0, 0);

/// `Genre` renamed from `Category` at 2.0.0, with both snapshots present.
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
