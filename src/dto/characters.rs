use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Character;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCharacterRequest {
    pub user_id: i32,
    pub name: String,
    pub gender: String,
    pub height: String,
    pub birth_year: String,
    pub skin_color: String,
    pub eyes_color: String,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateCharacterRequest {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub height: Option<String>,
    pub birth_year: Option<String>,
    pub skin_color: Option<String>,
    pub eyes_color: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct CharacterList {
    #[schema(value_type = Vec<Character>)]
    pub items: Vec<Character>,
}
