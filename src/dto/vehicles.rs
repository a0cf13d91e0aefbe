use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Vehicle;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateVehicleRequest {
    pub user_id: i32,
    pub name: String,
    pub model: String,
    pub cost_credits: String,
    pub max_speed: String,
    pub crew: String,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateVehicleRequest {
    pub name: Option<String>,
    pub model: Option<String>,
    pub cost_credits: Option<String>,
    pub max_speed: Option<String>,
    pub crew: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct VehicleList {
    #[schema(value_type = Vec<Vehicle>)]
    pub items: Vec<Vehicle>,
}
