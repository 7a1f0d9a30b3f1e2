//! Liveness endpoint.

use axum::{response::IntoResponse, Json};

/// Report that the server is up.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Server is running")),
    tag = "System"
)]
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
