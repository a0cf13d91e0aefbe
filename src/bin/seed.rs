use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use starwars_favourites::{
    config::AppConfig,
    db::{connect, create_schema},
    dto::{
        characters::CreateCharacterRequest, favourites::FavouriteKey,
        planets::CreatePlanetRequest, users::CreateUserRequest, vehicles::CreateVehicleRequest,
    },
    entity::{Users, users},
    services::{
        character_service, favourite_service, planet_service, user_service, vehicle_service,
    },
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,starwars_favourites=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    let state = AppState::from(connect(&config).await?);
    create_schema(&state.orm).await?;

    // Seeding is keyed on email; a second run leaves the catalog untouched.
    let existing = Users::find()
        .filter(users::Column::Email.eq("luke@rebellion.org"))
        .one(&state.orm)
        .await?;
    if let Some(user) = existing {
        println!("Seed already present. User ID: {}", user.id);
        return Ok(());
    }

    let luke = user_service::create_user(
        &state,
        CreateUserRequest {
            email: "luke@rebellion.org".into(),
            password: "usetheforce".into(),
            username: "luke".into(),
            firstname: "Luke".into(),
            lastname: "Skywalker".into(),
        },
    )
    .await?
    .data
    .ok_or_else(|| anyhow::anyhow!("user not returned"))?;

    let x_wing = vehicle_service::create_vehicle(
        &state,
        CreateVehicleRequest {
            user_id: luke.id,
            name: "X-wing".into(),
            model: "T-65 X-wing".into(),
            cost_credits: "149999".into(),
            max_speed: "1050".into(),
            crew: "1".into(),
        },
    )
    .await?
    .data
    .ok_or_else(|| anyhow::anyhow!("vehicle not returned"))?;

    let tatooine = planet_service::create_planet(
        &state,
        CreatePlanetRequest {
            user_id: luke.id,
            name: "Tatooine".into(),
            climate: "arid".into(),
            population: "200000".into(),
            terrain: "desert".into(),
        },
    )
    .await?
    .data
    .ok_or_else(|| anyhow::anyhow!("planet not returned"))?;

    let r2 = character_service::create_character(
        &state,
        CreateCharacterRequest {
            user_id: luke.id,
            name: "R2-D2".into(),
            gender: "n/a".into(),
            height: "96".into(),
            birth_year: "33BBY".into(),
            skin_color: "white, blue".into(),
            eyes_color: "red".into(),
        },
    )
    .await?
    .data
    .ok_or_else(|| anyhow::anyhow!("character not returned"))?;

    favourite_service::add_favourite(
        &state,
        FavouriteKey {
            user_id: luke.id,
            vehicle_id: x_wing.id,
            planet_id: tatooine.id,
            character_id: r2.id,
        },
    )
    .await?;

    println!("Seed completed. User ID: {}", luke.id);
    Ok(())
}
