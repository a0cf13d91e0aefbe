use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, LoaderTrait,
    ModelTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

use crate::{
    dto::vehicles::{CreateVehicleRequest, UpdateVehicleRequest, VehicleList},
    entity::{
        Favourites, Users,
        vehicles::{ActiveModel, Column, Entity as Vehicles, Model as VehicleModel},
    },
    error::{AppError, AppResult},
    models::Vehicle,
    params::OwnedListQuery,
    response::{ApiResponse, Meta},
    serialize::vehicle_from_entity,
    services::dangling_owner,
    state::AppState,
};

pub async fn create_vehicle(
    state: &AppState,
    payload: CreateVehicleRequest,
) -> AppResult<ApiResponse<Vehicle>> {
    let active = ActiveModel {
        id: NotSet,
        name: Set(payload.name),
        model: Set(payload.model),
        cost_credits: Set(payload.cost_credits),
        max_speed: Set(payload.max_speed),
        crew: Set(payload.crew),
        user_id: Set(payload.user_id),
    };
    let vehicle = active.insert(&state.orm).await?;

    tracing::info!(vehicle_id = vehicle.id, user_id = vehicle.user_id, "vehicle created");

    Ok(ApiResponse::success(
        "Vehicle created",
        load_vehicle(&state.orm, vehicle).await?,
        Some(Meta::empty()),
    ))
}

pub async fn get_vehicle(state: &AppState, id: i32) -> AppResult<ApiResponse<Vehicle>> {
    let vehicle = Vehicles::find_by_id(id).one(&state.orm).await?;
    let vehicle = match vehicle {
        Some(v) => v,
        None => return Err(AppError::NotFound),
    };
    Ok(ApiResponse::success(
        "Vehicle",
        load_vehicle(&state.orm, vehicle).await?,
        None,
    ))
}

pub async fn list_vehicles(
    state: &AppState,
    query: OwnedListQuery,
) -> AppResult<ApiResponse<VehicleList>> {
    let (page, limit, offset) = query.pagination.normalize();
    let mut condition = Condition::all();
    if let Some(user_id) = query.user_id {
        condition = condition.add(Column::UserId.eq(user_id));
    }

    let finder = Vehicles::find()
        .filter(condition)
        .order_by_asc(Column::Id);

    let total = finder.clone().count(&state.orm).await? as i64;

    let vehicles = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?;
    let owners = vehicles.load_one(Users, &state.orm).await?;
    let favourites = vehicles.load_many(Favourites, &state.orm).await?;

    let items = vehicles
        .into_iter()
        .zip(owners)
        .zip(favourites)
        .map(|((vehicle, owner), favs)| match owner {
            Some(owner) => Ok(vehicle_from_entity(vehicle, &owner, favs)),
            None => Err(dangling_owner("vehicle", vehicle.id, vehicle.user_id)),
        })
        .collect::<AppResult<Vec<_>>>()?;

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success("Vehicles", VehicleList { items }, Some(meta)))
}

pub async fn update_vehicle(
    state: &AppState,
    id: i32,
    payload: UpdateVehicleRequest,
) -> AppResult<ApiResponse<Vehicle>> {
    let existing = Vehicles::find_by_id(id).one(&state.orm).await?;
    let existing = match existing {
        Some(v) => v,
        None => return Err(AppError::NotFound),
    };

    let mut active: ActiveModel = existing.into();
    if let Some(name) = payload.name {
        active.name = Set(name);
    }
    if let Some(model) = payload.model {
        active.model = Set(model);
    }
    if let Some(cost_credits) = payload.cost_credits {
        active.cost_credits = Set(cost_credits);
    }
    if let Some(max_speed) = payload.max_speed {
        active.max_speed = Set(max_speed);
    }
    if let Some(crew) = payload.crew {
        active.crew = Set(crew);
    }

    let vehicle = active.update(&state.orm).await?;
    tracing::info!(vehicle_id = vehicle.id, "vehicle updated");

    Ok(ApiResponse::success(
        "Updated",
        load_vehicle(&state.orm, vehicle).await?,
        Some(Meta::empty()),
    ))
}

pub async fn delete_vehicle(
    state: &AppState,
    id: i32,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = Vehicles::delete_by_id(id).exec(&state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    tracing::info!(vehicle_id = id, "vehicle deleted");

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

async fn load_vehicle(db: &DatabaseConnection, vehicle: VehicleModel) -> AppResult<Vehicle> {
    let owner = vehicle.find_related(Users).one(db).await?;
    let owner = match owner {
        Some(u) => u,
        None => return Err(dangling_owner("vehicle", vehicle.id, vehicle.user_id)),
    };
    let favourites = vehicle.find_related(Favourites).all(db).await?;
    Ok(vehicle_from_entity(vehicle, &owner, favourites))
}
