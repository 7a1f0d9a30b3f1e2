//! User HTTP handlers.

use axum::{
    extract::{Path, State},
    Json,
};

use linkshelf_core::User;

use super::parse_id;
use crate::{ApiError, AppState};

/// Fetch a user by ID.
///
/// # Returns
/// - 200 OK with `{"id": ...}`
/// - 404 Not Found if no user has this ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "User not found"),
    ),
    tag = "Users"
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let not_found = || ApiError::NotFound(format!("User {} not found", id));

    let id = parse_id(&id).ok_or_else(not_found)?;
    state
        .users
        .get_user(id)
        .await?
        .map(Json)
        .ok_or_else(not_found)
}
