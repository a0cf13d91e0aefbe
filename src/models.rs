use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// A user with every record it owns, fully expanded.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    pub created_at: DateTime<Utc>,
    pub vehicle: Vec<Vehicle>,
    pub planet: Vec<Planet>,
    pub character: Vec<Character>,
    pub favourite: Vec<Favourite>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Vehicle {
    pub id: i32,
    pub name: String,
    pub model: String,
    pub cost_credits: String,
    pub max_speed: String,
    pub crew: String,
    /// Username of the owner.
    pub user_vehicles: String,
    pub favourite: Vec<Favourite>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Planet {
    pub id: i32,
    pub name: String,
    pub climate: String,
    pub population: String,
    pub terrain: String,
    /// Username of the owner.
    pub user_planets: String,
    pub favourite: Vec<Favourite>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Character {
    pub id: i32,
    pub name: String,
    pub gender: String,
    pub height: String,
    pub birth_year: String,
    pub skin_color: String,
    pub eyes_color: String,
    /// Username of the owner.
    pub user_characters: String,
    pub favourite: Vec<Favourite>,
}

/// Favourites only carry ids, so nesting them never recurses back into owners.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Favourite {
    #[serde(rename = "usersFav_id")]
    pub users_fav_id: i32,
    #[serde(rename = "vehiclesFav_id")]
    pub vehicles_fav_id: i32,
    #[serde(rename = "planetsFav_id")]
    pub planets_fav_id: i32,
    #[serde(rename = "charactersFav_id")]
    pub characters_fav_id: i32,
    pub date: DateTime<Utc>,
}
