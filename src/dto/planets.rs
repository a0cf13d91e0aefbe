use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Planet;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePlanetRequest {
    pub user_id: i32,
    pub name: String,
    pub climate: String,
    pub population: String,
    pub terrain: String,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdatePlanetRequest {
    pub name: Option<String>,
    pub climate: Option<String>,
    pub population: Option<String>,
    pub terrain: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct PlanetList {
    #[schema(value_type = Vec<Planet>)]
    pub items: Vec<Planet>,
}
