use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, LoaderTrait,
    ModelTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

use crate::{
    dto::planets::{CreatePlanetRequest, PlanetList, UpdatePlanetRequest},
    entity::{
        Favourites, Users,
        planets::{ActiveModel, Column, Entity as Planets, Model as PlanetModel},
    },
    error::{AppError, AppResult},
    models::Planet,
    params::OwnedListQuery,
    response::{ApiResponse, Meta},
    serialize::planet_from_entity,
    services::dangling_owner,
    state::AppState,
};

pub async fn create_planet(
    state: &AppState,
    payload: CreatePlanetRequest,
) -> AppResult<ApiResponse<Planet>> {
    let active = ActiveModel {
        id: NotSet,
        name: Set(payload.name),
        climate: Set(payload.climate),
        population: Set(payload.population),
        terrain: Set(payload.terrain),
        user_id: Set(payload.user_id),
    };
    let planet = active.insert(&state.orm).await?;

    tracing::info!(planet_id = planet.id, user_id = planet.user_id, "planet created");

    Ok(ApiResponse::success(
        "Planet created",
        load_planet(&state.orm, planet).await?,
        Some(Meta::empty()),
    ))
}

pub async fn get_planet(state: &AppState, id: i32) -> AppResult<ApiResponse<Planet>> {
    let planet = Planets::find_by_id(id).one(&state.orm).await?;
    let planet = match planet {
        Some(p) => p,
        None => return Err(AppError::NotFound),
    };
    Ok(ApiResponse::success(
        "Planet",
        load_planet(&state.orm, planet).await?,
        None,
    ))
}

pub async fn list_planets(
    state: &AppState,
    query: OwnedListQuery,
) -> AppResult<ApiResponse<PlanetList>> {
    let (page, limit, offset) = query.pagination.normalize();
    let mut condition = Condition::all();
    if let Some(user_id) = query.user_id {
        condition = condition.add(Column::UserId.eq(user_id));
    }

    let finder = Planets::find()
        .filter(condition)
        .order_by_asc(Column::Id);

    let total = finder.clone().count(&state.orm).await? as i64;

    let planets = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?;
    let owners = planets.load_one(Users, &state.orm).await?;
    let favourites = planets.load_many(Favourites, &state.orm).await?;

    let items = planets
        .into_iter()
        .zip(owners)
        .zip(favourites)
        .map(|((planet, owner), favs)| match owner {
            Some(owner) => Ok(planet_from_entity(planet, &owner, favs)),
            None => Err(dangling_owner("planet", planet.id, planet.user_id)),
        })
        .collect::<AppResult<Vec<_>>>()?;

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success("Planets", PlanetList { items }, Some(meta)))
}

pub async fn update_planet(
    state: &AppState,
    id: i32,
    payload: UpdatePlanetRequest,
) -> AppResult<ApiResponse<Planet>> {
    let existing = Planets::find_by_id(id).one(&state.orm).await?;
    let existing = match existing {
        Some(p) => p,
        None => return Err(AppError::NotFound),
    };

    let mut active: ActiveModel = existing.into();
    if let Some(name) = payload.name {
        active.name = Set(name);
    }
    if let Some(climate) = payload.climate {
        active.climate = Set(climate);
    }
    if let Some(population) = payload.population {
        active.population = Set(population);
    }
    if let Some(terrain) = payload.terrain {
        active.terrain = Set(terrain);
    }

    let planet = active.update(&state.orm).await?;
    tracing::info!(planet_id = planet.id, "planet updated");

    Ok(ApiResponse::success(
        "Updated",
        load_planet(&state.orm, planet).await?,
        Some(Meta::empty()),
    ))
}

pub async fn delete_planet(
    state: &AppState,
    id: i32,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = Planets::delete_by_id(id).exec(&state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    tracing::info!(planet_id = id, "planet deleted");

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

async fn load_planet(db: &DatabaseConnection, planet: PlanetModel) -> AppResult<Planet> {
    let owner = planet.find_related(Users).one(db).await?;
    let owner = match owner {
        Some(u) => u,
        None => return Err(dangling_owner("planet", planet.id, planet.user_id)),
    };
    let favourites = planet.find_related(Favourites).all(db).await?;
    Ok(planet_from_entity(planet, &owner, favourites))
}
