use starwars_favourites::doc::ApiDoc;
use utoipa::{
    OpenApi,
    openapi::{RefOr, schema::Schema},
};

fn property_names(name: &str) -> Vec<String> {
    let doc = ApiDoc::openapi();
    let components = doc.components.expect("components");
    match components.schemas.get(name) {
        Some(RefOr::T(Schema::Object(object))) => object.properties.keys().cloned().collect(),
        _ => panic!("expected an object schema for {name}"),
    }
}

#[test]
fn favourite_schema_uses_stored_key_names() {
    let names = property_names("Favourite");

    for key in ["usersFav_id", "vehiclesFav_id", "planetsFav_id", "charactersFav_id", "date"] {
        assert!(names.iter().any(|n| n == key), "missing {key}");
    }
}

#[test]
fn user_schema_has_nested_collections_and_no_password() {
    let names = property_names("User");

    for key in ["vehicle", "planet", "character", "favourite"] {
        assert!(names.iter().any(|n| n == key), "missing {key}");
    }
    assert!(!names.iter().any(|n| n == "password"));
}
