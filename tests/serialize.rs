use chrono::{DateTime, Utc};
use serde_json::json;
use starwars_favourites::{
    entity::{characters, favourites, planets, users, vehicles},
    serialize::{
        Owned, character_from_entity, favourite_from_entity, planet_from_entity,
        user_from_entity, vehicle_from_entity,
    },
};

fn luke() -> anyhow::Result<users::Model> {
    Ok(users::Model {
        id: 1,
        email: "a@b.com".into(),
        password: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".into(),
        username: "luke".into(),
        firstname: "Luke".into(),
        lastname: "Skywalker".into(),
        created_at: DateTime::parse_from_rfc3339("1977-05-25T00:00:00+00:00")?,
    })
}

fn x_wing() -> vehicles::Model {
    vehicles::Model {
        id: 5,
        name: "X-wing".into(),
        model: "T-65 X-wing".into(),
        cost_credits: "149999".into(),
        max_speed: "1050".into(),
        crew: "1".into(),
        user_id: 1,
    }
}

fn tatooine() -> planets::Model {
    planets::Model {
        id: 7,
        name: "Tatooine".into(),
        climate: "arid".into(),
        population: "200000".into(),
        terrain: "desert".into(),
        user_id: 1,
    }
}

fn r2() -> characters::Model {
    characters::Model {
        id: 9,
        name: "R2-D2".into(),
        gender: "n/a".into(),
        height: "96".into(),
        birth_year: "33BBY".into(),
        skin_color: "white, blue".into(),
        eyes_color: "red".into(),
        user_id: 1,
    }
}

fn favourite() -> anyhow::Result<favourites::Model> {
    Ok(favourites::Model {
        users_fav_id: 1,
        vehicles_fav_id: 5,
        planets_fav_id: 7,
        characters_fav_id: 9,
        date: DateTime::parse_from_rfc3339("1980-05-21T12:00:00+02:00")?,
    })
}

#[test]
fn vehicle_without_favourites_matches_expected_mapping() -> anyhow::Result<()> {
    let owner = luke()?;
    let value = serde_json::to_value(vehicle_from_entity(x_wing(), &owner, Vec::new()))?;

    assert_eq!(
        value,
        json!({
            "id": 5,
            "name": "X-wing",
            "model": "T-65 X-wing",
            "cost_credits": "149999",
            "max_speed": "1050",
            "crew": "1",
            "user_vehicles": "luke",
            "favourite": []
        })
    );
    Ok(())
}

#[test]
fn children_report_owner_username() -> anyhow::Result<()> {
    let owner = luke()?;

    let planet = serde_json::to_value(planet_from_entity(tatooine(), &owner, Vec::new()))?;
    assert_eq!(planet["user_planets"], "luke");

    let character = serde_json::to_value(character_from_entity(r2(), &owner, Vec::new()))?;
    assert_eq!(character["user_characters"], "luke");
    assert_eq!(character["eyes_color"], "red");
    Ok(())
}

#[test]
fn favourite_reports_each_referenced_id() -> anyhow::Result<()> {
    let fav = favourite()?;
    let expected_date = fav.date.with_timezone(&Utc);
    let value = serde_json::to_value(favourite_from_entity(fav))?;

    assert_eq!(value["usersFav_id"], 1);
    assert_eq!(value["vehiclesFav_id"], 5);
    assert_eq!(value["planetsFav_id"], 7);
    assert_eq!(value["charactersFav_id"], 9);
    assert_eq!(value["date"], serde_json::to_value(expected_date)?);
    assert!(value.get("vahiclesFav_id").is_none());
    Ok(())
}

#[test]
fn user_expands_everything_it_owns() -> anyhow::Result<()> {
    let owned = Owned {
        vehicles: vec![(x_wing(), vec![favourite()?])],
        planets: vec![(tatooine(), vec![favourite()?])],
        characters: vec![(r2(), Vec::new())],
        favourites: vec![favourite()?],
    };
    let user = user_from_entity(luke()?, owned);
    let value = serde_json::to_value(&user)?;

    assert_eq!(value["email"], "a@b.com");
    assert_eq!(value["username"], "luke");
    assert_eq!(value["vehicle"][0]["user_vehicles"], "luke");
    assert_eq!(value["vehicle"][0]["favourite"][0]["vehiclesFav_id"], 5);
    assert_eq!(value["planet"][0]["name"], "Tatooine");
    assert_eq!(value["character"][0]["favourite"], json!([]));
    assert_eq!(value["favourite"][0]["charactersFav_id"], 9);
    Ok(())
}

#[test]
fn user_never_exposes_password() -> anyhow::Result<()> {
    let value = serde_json::to_value(user_from_entity(luke()?, Owned::default()))?;

    assert!(value.get("password").is_none());
    assert_eq!(value["vehicle"], json!([]));
    assert_eq!(value["favourite"], json!([]));
    Ok(())
}
