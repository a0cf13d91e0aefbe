use argon2::{
    Argon2, PasswordHasher,
    password_hash::{SaltString, rand_core::OsRng},
};
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, LoaderTrait, PaginatorTrait, QueryOrder,
    QuerySelect, Set,
};

use crate::{
    dto::users::{CreateUserRequest, UpdateUserRequest, UserList},
    entity::{
        Characters, Favourites, Planets, Vehicles,
        users::{ActiveModel, Column, Entity as Users, Model as UserModel},
    },
    error::{AppError, AppResult},
    models::User,
    params::Pagination,
    response::{ApiResponse, Meta},
    serialize::{Owned, user_from_entity},
    state::AppState,
};

pub async fn create_user(
    state: &AppState,
    payload: CreateUserRequest,
) -> AppResult<ApiResponse<User>> {
    let password = hash_password(&payload.password)?;
    let active = ActiveModel {
        id: NotSet,
        email: Set(payload.email),
        password: Set(password),
        username: Set(payload.username),
        firstname: Set(payload.firstname),
        lastname: Set(payload.lastname),
        created_at: NotSet,
    };
    let user = active.insert(&state.orm).await?;

    tracing::info!(user_id = user.id, username = %user.username, "user created");

    Ok(ApiResponse::success(
        "User created",
        user_from_entity(user, Owned::default()),
        Some(Meta::empty()),
    ))
}

pub async fn get_user(state: &AppState, id: i32) -> AppResult<ApiResponse<User>> {
    let user = Users::find_by_id(id).one(&state.orm).await?;
    let user = match user {
        Some(u) => u,
        None => return Err(AppError::NotFound),
    };

    let data = load_user_graphs(&state.orm, vec![user])
        .await?
        .pop()
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("User", data, None))
}

pub async fn list_users(
    state: &AppState,
    pagination: Pagination,
) -> AppResult<ApiResponse<UserList>> {
    let (page, limit, offset) = pagination.normalize();
    let finder = Users::find().order_by_asc(Column::Id);

    let total = finder.clone().count(&state.orm).await? as i64;

    let users = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?;
    let items = load_user_graphs(&state.orm, users).await?;

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success("Users", UserList { items }, Some(meta)))
}

pub async fn update_user(
    state: &AppState,
    id: i32,
    payload: UpdateUserRequest,
) -> AppResult<ApiResponse<User>> {
    let existing = Users::find_by_id(id).one(&state.orm).await?;
    let existing = match existing {
        Some(u) => u,
        None => return Err(AppError::NotFound),
    };

    let mut active: ActiveModel = existing.into();
    if let Some(email) = payload.email {
        active.email = Set(email);
    }
    if let Some(password) = payload.password {
        active.password = Set(hash_password(&password)?);
    }
    if let Some(username) = payload.username {
        active.username = Set(username);
    }
    if let Some(firstname) = payload.firstname {
        active.firstname = Set(firstname);
    }
    if let Some(lastname) = payload.lastname {
        active.lastname = Set(lastname);
    }

    let user = active.update(&state.orm).await?;
    tracing::info!(user_id = user.id, "user updated");

    let data = load_user_graphs(&state.orm, vec![user])
        .await?
        .pop()
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Updated", data, Some(Meta::empty())))
}

/// Deletes a user. Rejected with a conflict while the user still owns records.
pub async fn delete_user(
    state: &AppState,
    id: i32,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = Users::delete_by_id(id).exec(&state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    tracing::info!(user_id = id, "user deleted");

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

/// Expands users into their full serialized graph.
///
/// Runs one query per relation regardless of how many users are passed.
pub async fn load_user_graphs(
    db: &DatabaseConnection,
    users: Vec<UserModel>,
) -> AppResult<Vec<User>> {
    let vehicles = users.load_many(Vehicles, db).await?;
    let planets = users.load_many(Planets, db).await?;
    let characters = users.load_many(Characters, db).await?;
    let favourites = users.load_many(Favourites, db).await?;

    let flat_vehicles: Vec<_> = vehicles.iter().flatten().cloned().collect();
    let mut vehicle_favs = flat_vehicles.load_many(Favourites, db).await?.into_iter();
    let flat_planets: Vec<_> = planets.iter().flatten().cloned().collect();
    let mut planet_favs = flat_planets.load_many(Favourites, db).await?.into_iter();
    let flat_characters: Vec<_> = characters.iter().flatten().cloned().collect();
    let mut character_favs = flat_characters.load_many(Favourites, db).await?.into_iter();

    let graphs = users
        .into_iter()
        .zip(vehicles)
        .zip(planets)
        .zip(characters)
        .zip(favourites)
        .map(|((((user, vehicles), planets), characters), favourites)| {
            let owned = Owned {
                vehicles: vehicles
                    .into_iter()
                    .map(|v| (v, vehicle_favs.next().unwrap_or_default()))
                    .collect(),
                planets: planets
                    .into_iter()
                    .map(|p| (p, planet_favs.next().unwrap_or_default()))
                    .collect(),
                characters: characters
                    .into_iter()
                    .map(|c| (c, character_favs.next().unwrap_or_default()))
                    .collect(),
                favourites,
            };
            user_from_entity(user, owned)
        })
        .collect();

    Ok(graphs)
}

fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?
        .to_string();
    Ok(hash)
}
