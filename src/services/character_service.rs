use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, LoaderTrait,
    ModelTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

use crate::{
    dto::characters::{CharacterList, CreateCharacterRequest, UpdateCharacterRequest},
    entity::{
        Favourites, Users,
        characters::{ActiveModel, Column, Entity as Characters, Model as CharacterModel},
    },
    error::{AppError, AppResult},
    models::Character,
    params::OwnedListQuery,
    response::{ApiResponse, Meta},
    serialize::character_from_entity,
    services::dangling_owner,
    state::AppState,
};

pub async fn create_character(
    state: &AppState,
    payload: CreateCharacterRequest,
) -> AppResult<ApiResponse<Character>> {
    let active = ActiveModel {
        id: NotSet,
        name: Set(payload.name),
        gender: Set(payload.gender),
        height: Set(payload.height),
        birth_year: Set(payload.birth_year),
        skin_color: Set(payload.skin_color),
        eyes_color: Set(payload.eyes_color),
        user_id: Set(payload.user_id),
    };
    let character = active.insert(&state.orm).await?;

    tracing::info!(character_id = character.id, user_id = character.user_id, "character created");

    Ok(ApiResponse::success(
        "Character created",
        load_character(&state.orm, character).await?,
        Some(Meta::empty()),
    ))
}

pub async fn get_character(state: &AppState, id: i32) -> AppResult<ApiResponse<Character>> {
    let character = Characters::find_by_id(id).one(&state.orm).await?;
    let character = match character {
        Some(c) => c,
        None => return Err(AppError::NotFound),
    };
    Ok(ApiResponse::success(
        "Character",
        load_character(&state.orm, character).await?,
        None,
    ))
}

pub async fn list_characters(
    state: &AppState,
    query: OwnedListQuery,
) -> AppResult<ApiResponse<CharacterList>> {
    let (page, limit, offset) = query.pagination.normalize();
    let mut condition = Condition::all();
    if let Some(user_id) = query.user_id {
        condition = condition.add(Column::UserId.eq(user_id));
    }

    let finder = Characters::find()
        .filter(condition)
        .order_by_asc(Column::Id);

    let total = finder.clone().count(&state.orm).await? as i64;

    let characters = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?;
    let owners = characters.load_one(Users, &state.orm).await?;
    let favourites = characters.load_many(Favourites, &state.orm).await?;

    let items = characters
        .into_iter()
        .zip(owners)
        .zip(favourites)
        .map(|((character, owner), favs)| match owner {
            Some(owner) => Ok(character_from_entity(character, &owner, favs)),
            None => Err(dangling_owner("character", character.id, character.user_id)),
        })
        .collect::<AppResult<Vec<_>>>()?;

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success("Characters", CharacterList { items }, Some(meta)))
}

pub async fn update_character(
    state: &AppState,
    id: i32,
    payload: UpdateCharacterRequest,
) -> AppResult<ApiResponse<Character>> {
    let existing = Characters::find_by_id(id).one(&state.orm).await?;
    let existing = match existing {
        Some(c) => c,
        None => return Err(AppError::NotFound),
    };

    let mut active: ActiveModel = existing.into();
    if let Some(name) = payload.name {
        active.name = Set(name);
    }
    if let Some(gender) = payload.gender {
        active.gender = Set(gender);
    }
    if let Some(height) = payload.height {
        active.height = Set(height);
    }
    if let Some(birth_year) = payload.birth_year {
        active.birth_year = Set(birth_year);
    }
    if let Some(skin_color) = payload.skin_color {
        active.skin_color = Set(skin_color);
    }
    if let Some(eyes_color) = payload.eyes_color {
        active.eyes_color = Set(eyes_color);
    }

    let character = active.update(&state.orm).await?;
    tracing::info!(character_id = character.id, "character updated");

    Ok(ApiResponse::success(
        "Updated",
        load_character(&state.orm, character).await?,
        Some(Meta::empty()),
    ))
}

pub async fn delete_character(
    state: &AppState,
    id: i32,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = Characters::delete_by_id(id).exec(&state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    tracing::info!(character_id = id, "character deleted");

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

async fn load_character(db: &DatabaseConnection, character: CharacterModel) -> AppResult<Character> {
    let owner = character.find_related(Users).one(db).await?;
    let owner = match owner {
        Some(u) => u,
        None => return Err(dangling_owner("character", character.id, character.user_id)),
    };
    let favourites = character.find_related(Favourites).all(db).await?;
    Ok(character_from_entity(character, &owner, favourites))
}
