//! Conversions from entity models to their serialized views.
//!
//! Every function here is pure: callers load the related rows and pass them
//! in, so a missing owner is a loading problem and never reaches this module.

use chrono::Utc;

use crate::{
    entity::{characters, favourites, planets, users, vehicles},
    models::{Character, Favourite, Planet, User, Vehicle},
};

pub fn favourite_from_entity(model: favourites::Model) -> Favourite {
    Favourite {
        users_fav_id: model.users_fav_id,
        vehicles_fav_id: model.vehicles_fav_id,
        planets_fav_id: model.planets_fav_id,
        characters_fav_id: model.characters_fav_id,
        date: model.date.with_timezone(&Utc),
    }
}

pub fn vehicle_from_entity(
    model: vehicles::Model,
    owner: &users::Model,
    favourites: Vec<favourites::Model>,
) -> Vehicle {
    Vehicle {
        id: model.id,
        name: model.name,
        model: model.model,
        cost_credits: model.cost_credits,
        max_speed: model.max_speed,
        crew: model.crew,
        user_vehicles: owner.username.clone(),
        favourite: favourites.into_iter().map(favourite_from_entity).collect(),
    }
}

pub fn planet_from_entity(
    model: planets::Model,
    owner: &users::Model,
    favourites: Vec<favourites::Model>,
) -> Planet {
    Planet {
        id: model.id,
        name: model.name,
        climate: model.climate,
        population: model.population,
        terrain: model.terrain,
        user_planets: owner.username.clone(),
        favourite: favourites.into_iter().map(favourite_from_entity).collect(),
    }
}

pub fn character_from_entity(
    model: characters::Model,
    owner: &users::Model,
    favourites: Vec<favourites::Model>,
) -> Character {
    Character {
        id: model.id,
        name: model.name,
        gender: model.gender,
        height: model.height,
        birth_year: model.birth_year,
        skin_color: model.skin_color,
        eyes_color: model.eyes_color,
        user_characters: owner.username.clone(),
        favourite: favourites.into_iter().map(favourite_from_entity).collect(),
    }
}

/// Everything a user owns, each child paired with the favourites pointing at it.
#[derive(Debug, Clone, Default)]
pub struct Owned {
    pub vehicles: Vec<(vehicles::Model, Vec<favourites::Model>)>,
    pub planets: Vec<(planets::Model, Vec<favourites::Model>)>,
    pub characters: Vec<(characters::Model, Vec<favourites::Model>)>,
    pub favourites: Vec<favourites::Model>,
}

pub fn user_from_entity(model: users::Model, owned: Owned) -> User {
    let vehicle = owned
        .vehicles
        .into_iter()
        .map(|(v, favs)| vehicle_from_entity(v, &model, favs))
        .collect();
    let planet = owned
        .planets
        .into_iter()
        .map(|(p, favs)| planet_from_entity(p, &model, favs))
        .collect();
    let character = owned
        .characters
        .into_iter()
        .map(|(c, favs)| character_from_entity(c, &model, favs))
        .collect();

    User {
        id: model.id,
        email: model.email,
        username: model.username,
        firstname: model.firstname,
        lastname: model.lastname,
        created_at: model.created_at.with_timezone(&Utc),
        vehicle,
        planet,
        character,
        favourite: owned
            .favourites
            .into_iter()
            .map(favourite_from_entity)
            .collect(),
    }
}
