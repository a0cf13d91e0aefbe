#![allow(dead_code)]

use starwars_favourites::{
    config::AppConfig,
    db::{connect, create_schema},
    dto::{
        characters::CreateCharacterRequest, planets::CreatePlanetRequest,
        users::CreateUserRequest, vehicles::CreateVehicleRequest,
    },
    models::{Character, Planet, User, Vehicle},
    services::{character_service, planet_service, user_service, vehicle_service},
    state::AppState,
};

/// Fresh in-memory database with every table created.
///
/// A single connection keeps the in-memory database alive for the whole test.
pub async fn setup() -> anyhow::Result<AppState> {
    let config = AppConfig {
        database_url: "sqlite::memory:".into(),
        max_connections: 1,
    };
    let orm = connect(&config).await?;
    create_schema(&orm).await?;
    Ok(AppState::from(orm))
}

pub fn user_request(username: &str) -> CreateUserRequest {
    CreateUserRequest {
        email: format!("{username}@rebellion.org"),
        password: "usetheforce".into(),
        username: username.into(),
        firstname: "Luke".into(),
        lastname: "Skywalker".into(),
    }
}

pub async fn create_user(state: &AppState, username: &str) -> anyhow::Result<User> {
    let resp = user_service::create_user(state, user_request(username)).await?;
    resp.data.ok_or_else(|| anyhow::anyhow!("user missing"))
}

pub async fn create_vehicle(state: &AppState, user_id: i32, name: &str) -> anyhow::Result<Vehicle> {
    let resp = vehicle_service::create_vehicle(
        state,
        CreateVehicleRequest {
            user_id,
            name: name.into(),
            model: "T-65 X-wing".into(),
            cost_credits: "149999".into(),
            max_speed: "1050".into(),
            crew: "1".into(),
        },
    )
    .await?;
    resp.data.ok_or_else(|| anyhow::anyhow!("vehicle missing"))
}

pub async fn create_planet(state: &AppState, user_id: i32, name: &str) -> anyhow::Result<Planet> {
    let resp = planet_service::create_planet(
        state,
        CreatePlanetRequest {
            user_id,
            name: name.into(),
            climate: "arid".into(),
            population: "200000".into(),
            terrain: "desert".into(),
        },
    )
    .await?;
    resp.data.ok_or_else(|| anyhow::anyhow!("planet missing"))
}

pub async fn create_character(
    state: &AppState,
    user_id: i32,
    name: &str,
) -> anyhow::Result<Character> {
    let resp = character_service::create_character(
        state,
        CreateCharacterRequest {
            user_id,
            name: name.into(),
            gender: "n/a".into(),
            height: "96".into(),
            birth_year: "33BBY".into(),
            skin_color: "white, blue".into(),
            eyes_color: "red".into(),
        },
    )
    .await?;
    resp.data.ok_or_else(|| anyhow::anyhow!("character missing"))
}
