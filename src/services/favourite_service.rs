use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use crate::{
    dto::favourites::{FavouriteKey, FavouriteList},
    entity::favourites::{ActiveModel, Column, Entity as Favourites},
    error::{AppError, AppResult},
    models::Favourite,
    params::OwnedListQuery,
    response::{ApiResponse, Meta},
    serialize::favourite_from_entity,
    state::AppState,
};

/// Stores a favourite. Adding an existing combination returns the stored row.
///
/// Every id in the key must resolve; a dangling id is rejected by the
/// foreign keys and surfaces as [`AppError::Conflict`].
pub async fn add_favourite(
    state: &AppState,
    key: FavouriteKey,
) -> AppResult<ApiResponse<Favourite>> {
    let existing = Favourites::find_by_id(key.as_tuple())
        .one(&state.orm)
        .await?;

    let favourite = if let Some(fav) = existing {
        fav
    } else {
        let active = ActiveModel {
            users_fav_id: Set(key.user_id),
            vehicles_fav_id: Set(key.vehicle_id),
            planets_fav_id: Set(key.planet_id),
            characters_fav_id: Set(key.character_id),
            date: NotSet,
        };
        let fav = active.insert(&state.orm).await?;
        tracing::info!(
            user_id = key.user_id,
            vehicle_id = key.vehicle_id,
            planet_id = key.planet_id,
            character_id = key.character_id,
            "favourite added"
        );
        fav
    };

    Ok(ApiResponse::success(
        "Added to favourites",
        favourite_from_entity(favourite),
        Some(Meta::empty()),
    ))
}

pub async fn get_favourite(
    state: &AppState,
    key: FavouriteKey,
) -> AppResult<ApiResponse<Favourite>> {
    let favourite = Favourites::find_by_id(key.as_tuple())
        .one(&state.orm)
        .await?;
    let favourite = match favourite {
        Some(f) => f,
        None => return Err(AppError::NotFound),
    };
    Ok(ApiResponse::success(
        "Favourite",
        favourite_from_entity(favourite),
        None,
    ))
}

/// Lists favourites newest first, optionally only those of one user.
pub async fn list_favourites(
    state: &AppState,
    query: OwnedListQuery,
) -> AppResult<ApiResponse<FavouriteList>> {
    let (page, limit, offset) = query.pagination.normalize();
    let mut condition = Condition::all();
    if let Some(user_id) = query.user_id {
        condition = condition.add(Column::UsersFavId.eq(user_id));
    }

    let finder = Favourites::find()
        .filter(condition)
        .order_by_desc(Column::Date);

    let total = finder.clone().count(&state.orm).await? as i64;

    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(favourite_from_entity)
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success("OK", FavouriteList { items }, Some(meta)))
}

pub async fn remove_favourite(
    state: &AppState,
    key: FavouriteKey,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = Favourites::delete_by_id(key.as_tuple())
        .exec(&state.orm)
        .await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    tracing::info!(
        user_id = key.user_id,
        vehicle_id = key.vehicle_id,
        planet_id = key.planet_id,
        character_id = key.character_id,
        "favourite removed"
    );

    Ok(ApiResponse::success(
        "Removed from favourites",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}
