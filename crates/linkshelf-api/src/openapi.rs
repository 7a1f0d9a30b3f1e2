//! OpenAPI document for the HTTP API.

use axum::Json;
use utoipa::OpenApi;

use crate::error::ErrorBody;
use crate::handlers::{bookmarks, health, users};
use linkshelf_core::{Bookmark, BookmarkInput, User};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "linkshelf API",
        description = "Bookmark storage with tag and text filtering."
    ),
    paths(
        bookmarks::create_bookmark,
        bookmarks::list_bookmarks,
        bookmarks::update_bookmark,
        bookmarks::delete_bookmark,
        bookmarks::delete_all_bookmarks,
        users::get_user,
        health::health_check,
    ),
    components(schemas(Bookmark, BookmarkInput, User, ErrorBody)),
    tags(
        (name = "Bookmarks", description = "Bookmark CRUD and filtering"),
        (name = "Users", description = "User lookup"),
        (name = "System", description = "Health and metadata"),
    )
)]
pub struct ApiDoc;

/// Serve the generated OpenAPI document as JSON.
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
