use utoipa::OpenApi;

use crate::{
    dto::{
        characters::{CharacterList, CreateCharacterRequest, UpdateCharacterRequest},
        favourites::{FavouriteKey, FavouriteList},
        planets::{CreatePlanetRequest, PlanetList, UpdatePlanetRequest},
        users::{CreateUserRequest, UpdateUserRequest, UserList},
        vehicles::{CreateVehicleRequest, UpdateVehicleRequest, VehicleList},
    },
    models::{Character, Favourite, Planet, User, Vehicle},
    params::{OwnedListQuery, Pagination},
    response::{ApiResponse, Meta},
};

/// Schemas of every serialized view, for the web layer that serves them.
#[derive(OpenApi)]
#[openapi(
    components(
        schemas(
            User,
            Vehicle,
            Planet,
            Character,
            Favourite,
            FavouriteKey,
            CreateUserRequest,
            UpdateUserRequest,
            CreateVehicleRequest,
            UpdateVehicleRequest,
            CreatePlanetRequest,
            UpdatePlanetRequest,
            CreateCharacterRequest,
            UpdateCharacterRequest,
            UserList,
            VehicleList,
            PlanetList,
            CharacterList,
            FavouriteList,
            Pagination,
            OwnedListQuery,
            Meta,
            ApiResponse<User>,
            ApiResponse<Favourite>
        )
    ),
    tags(
        (name = "Users", description = "Catalog owners"),
        (name = "Catalog", description = "Vehicles, planets and characters"),
        (name = "Favourites", description = "Favourite combinations"),
    )
)]
pub struct ApiDoc;
