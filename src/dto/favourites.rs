use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Favourite;

/// The composite key of a favourite row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct FavouriteKey {
    #[serde(rename = "usersFav_id")]
    pub user_id: i32,
    #[serde(rename = "vehiclesFav_id")]
    pub vehicle_id: i32,
    #[serde(rename = "planetsFav_id")]
    pub planet_id: i32,
    #[serde(rename = "charactersFav_id")]
    pub character_id: i32,
}

impl FavouriteKey {
    pub fn as_tuple(&self) -> (i32, i32, i32, i32) {
        (
            self.user_id,
            self.vehicle_id,
            self.planet_id,
            self.character_id,
        )
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct FavouriteList {
    #[schema(value_type = Vec<Favourite>)]
    pub items: Vec<Favourite>,
}
