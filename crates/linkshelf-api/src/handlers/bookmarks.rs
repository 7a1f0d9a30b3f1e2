//! Bookmark HTTP handlers.
//!
//! Routes:
//! - `POST   /bookmarks/create`
//! - `GET    /bookmarks?tag=&q=`
//! - `PUT    /bookmarks/:id`
//! - `DELETE /bookmarks/:id`
//! - `DELETE /bookmarks`

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use linkshelf_core::{Bookmark, BookmarkInput};

use super::parse_id;
use crate::{ApiError, AppState};

/// Query parameters for listing bookmarks.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListBookmarksQuery {
    /// Only bookmarks whose tags contain this text.
    pub tag: Option<String>,
    /// Only bookmarks whose title or url contain this text.
    pub q: Option<String>,
}

fn validate_input(input: &BookmarkInput) -> Result<(), ApiError> {
    if input.title.trim().is_empty() {
        return Err(ApiError::BadRequest("title is required".to_string()));
    }
    Ok(())
}

/// Create a bookmark.
///
/// # Returns
/// - 201 Created with the stored bookmark, including generated `id` and `created_at`
/// - 400 Bad Request if the title is blank
#[utoipa::path(
    post,
    path = "/bookmarks/create",
    request_body = BookmarkInput,
    responses(
        (status = 201, description = "Bookmark created", body = Bookmark),
        (status = 400, description = "Blank title or malformed JSON body"),
    ),
    tag = "Bookmarks"
)]
pub async fn create_bookmark(
    State(state): State<AppState>,
    payload: Result<Json<BookmarkInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Bookmark>), ApiError> {
    let Json(body) = payload?;
    validate_input(&body)?;
    let bookmark = state.bookmarks.create_bookmark(body).await?;
    Ok((StatusCode::CREATED, Json(bookmark)))
}

/// List bookmarks, optionally filtered by tag and search text.
///
/// Empty parameters are ignored. Both filters together must both match.
#[utoipa::path(
    get,
    path = "/bookmarks",
    params(ListBookmarksQuery),
    responses(
        (status = 200, description = "Matching bookmarks", body = [Bookmark]),
    ),
    tag = "Bookmarks"
)]
pub async fn list_bookmarks(
    State(state): State<AppState>,
    Query(query): Query<ListBookmarksQuery>,
) -> Result<Json<Vec<Bookmark>>, ApiError> {
    let bookmarks = state.bookmarks.list_bookmarks(query.tag, query.q).await?;
    Ok(Json(bookmarks))
}

/// Replace a bookmark's title, url and tags.
///
/// # Returns
/// - 200 OK with the updated bookmark
/// - 404 Not Found if no bookmark has this ID
#[utoipa::path(
    put,
    path = "/bookmarks/{id}",
    params(("id" = String, Path, description = "Bookmark ID")),
    request_body = BookmarkInput,
    responses(
        (status = 200, description = "Bookmark updated", body = Bookmark),
        (status = 400, description = "Blank title or malformed JSON body"),
        (status = 404, description = "Bookmark not found"),
    ),
    tag = "Bookmarks"
)]
pub async fn update_bookmark(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<BookmarkInput>, JsonRejection>,
) -> Result<Json<Bookmark>, ApiError> {
    let id = parse_id(&id).ok_or_else(|| ApiError::NotFound(format!("Bookmark {} not found", id)))?;
    let Json(body) = payload?;
    validate_input(&body)?;
    let bookmark = state.bookmarks.update_bookmark(id, body).await?;
    Ok(Json(bookmark))
}

/// Delete one bookmark. Unknown IDs succeed without effect.
#[utoipa::path(
    delete,
    path = "/bookmarks/{id}",
    params(("id" = String, Path, description = "Bookmark ID")),
    responses((status = 200, description = "Bookmark deleted or already absent")),
    tag = "Bookmarks"
)]
pub async fn delete_bookmark(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if let Some(id) = parse_id(&id) {
        state.bookmarks.delete_bookmark(id).await?;
    }
    Ok(StatusCode::OK)
}

/// Delete every bookmark.
#[utoipa::path(
    delete,
    path = "/bookmarks",
    responses((status = 200, description = "All bookmarks deleted")),
    tag = "Bookmarks"
)]
pub async fn delete_all_bookmarks(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    state.bookmarks.delete_all_bookmarks().await?;
    Ok(StatusCode::OK)
}
