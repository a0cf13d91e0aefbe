mod common;

use sea_orm::{EntityTrait, PaginatorTrait};
use starwars_favourites::{
    dto::{favourites::FavouriteKey, vehicles::CreateVehicleRequest},
    entity::{Favourites, Users, Vehicles},
    error::AppError,
    services::{favourite_service, user_service, vehicle_service},
};

use common::{create_character, create_planet, create_user, create_vehicle, setup, user_request};

#[tokio::test]
async fn duplicate_email_is_rejected() -> anyhow::Result<()> {
    let state = setup().await?;
    create_user(&state, "luke").await?;

    let mut request = user_request("skywalker");
    request.email = "luke@rebellion.org".into();
    let result = user_service::create_user(&state, request).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(Users::find().count(&state.orm).await?, 1);
    Ok(())
}

#[tokio::test]
async fn duplicate_username_is_rejected() -> anyhow::Result<()> {
    let state = setup().await?;
    create_user(&state, "luke").await?;

    let mut request = user_request("luke");
    request.email = "other@rebellion.org".into();
    let result = user_service::create_user(&state, request).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    Ok(())
}

#[tokio::test]
async fn vehicle_requires_existing_owner() -> anyhow::Result<()> {
    let state = setup().await?;

    let result = vehicle_service::create_vehicle(
        &state,
        CreateVehicleRequest {
            user_id: 42,
            name: "TIE Fighter".into(),
            model: "Twin Ion Engine".into(),
            cost_credits: "unknown".into(),
            max_speed: "1200".into(),
            crew: "1".into(),
        },
    )
    .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(Vehicles::find().count(&state.orm).await?, 0);
    Ok(())
}

#[tokio::test]
async fn favourite_requires_every_reference() -> anyhow::Result<()> {
    let state = setup().await?;

    let luke = create_user(&state, "luke").await?;
    let x_wing = create_vehicle(&state, luke.id, "X-wing").await?;
    let tatooine = create_planet(&state, luke.id, "Tatooine").await?;
    let r2 = create_character(&state, luke.id, "R2-D2").await?;
    let valid = FavouriteKey {
        user_id: luke.id,
        vehicle_id: x_wing.id,
        planet_id: tatooine.id,
        character_id: r2.id,
    };

    let broken = [
        FavouriteKey { user_id: 999, ..valid },
        FavouriteKey { vehicle_id: 999, ..valid },
        FavouriteKey { planet_id: 999, ..valid },
        FavouriteKey { character_id: 999, ..valid },
    ];
    for key in broken {
        let result = favourite_service::add_favourite(&state, key).await;
        assert!(
            matches!(result, Err(AppError::Conflict(_))),
            "expected {key:?} to be rejected"
        );
    }
    assert_eq!(Favourites::find().count(&state.orm).await?, 0);

    favourite_service::add_favourite(&state, valid).await?;
    assert_eq!(Favourites::find().count(&state.orm).await?, 1);
    Ok(())
}

#[tokio::test]
async fn same_favourite_is_stored_once() -> anyhow::Result<()> {
    let state = setup().await?;

    let luke = create_user(&state, "luke").await?;
    let x_wing = create_vehicle(&state, luke.id, "X-wing").await?;
    let tatooine = create_planet(&state, luke.id, "Tatooine").await?;
    let r2 = create_character(&state, luke.id, "R2-D2").await?;
    let key = FavouriteKey {
        user_id: luke.id,
        vehicle_id: x_wing.id,
        planet_id: tatooine.id,
        character_id: r2.id,
    };

    let first = favourite_service::add_favourite(&state, key).await?.data;
    let second = favourite_service::add_favourite(&state, key).await?.data;

    assert_eq!(first, second);
    assert_eq!(Favourites::find().count(&state.orm).await?, 1);

    let fetched = favourite_service::get_favourite(&state, key).await?.data;
    assert_eq!(fetched, first);
    Ok(())
}

#[tokio::test]
async fn deleting_an_owner_with_records_is_rejected() -> anyhow::Result<()> {
    let state = setup().await?;

    let luke = create_user(&state, "luke").await?;
    create_vehicle(&state, luke.id, "X-wing").await?;

    let result = user_service::delete_user(&state, luke.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert!(Users::find_by_id(luke.id).one(&state.orm).await?.is_some());
    Ok(())
}

#[tokio::test]
async fn missing_records_are_not_found() -> anyhow::Result<()> {
    let state = setup().await?;

    assert!(matches!(
        user_service::get_user(&state, 1).await,
        Err(AppError::NotFound)
    ));
    assert!(matches!(
        vehicle_service::get_vehicle(&state, 1).await,
        Err(AppError::NotFound)
    ));
    assert!(matches!(
        vehicle_service::delete_vehicle(&state, 1).await,
        Err(AppError::NotFound)
    ));

    let key = FavouriteKey {
        user_id: 1,
        vehicle_id: 1,
        planet_id: 1,
        character_id: 1,
    };
    assert!(matches!(
        favourite_service::remove_favourite(&state, key).await,
        Err(AppError::NotFound)
    ));
    assert!(matches!(
        favourite_service::get_favourite(&state, key).await,
        Err(AppError::NotFound)
    ));
    Ok(())
}
