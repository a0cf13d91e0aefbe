use crate::error::AppError;

pub mod character_service;
pub mod favourite_service;
pub mod planet_service;
pub mod user_service;
pub mod vehicle_service;

/// A child row whose owner could not be loaded. Foreign keys make this
/// unreachable on a healthy database.
pub(crate) fn dangling_owner(kind: &str, id: i32, user_id: i32) -> AppError {
    AppError::Internal(anyhow::anyhow!(
        "{kind} {id} references missing user {user_id}"
    ))
}
