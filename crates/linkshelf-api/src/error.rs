//! HTTP error mapping.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// JSON body returned for every error response.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

/// Errors surfaced by handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Storage or other server-side failure.
    #[error(transparent)]
    Internal(linkshelf_core::Error),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    PayloadTooLarge(String),
}

impl From<linkshelf_core::Error> for ApiError {
    fn from(err: linkshelf_core::Error) -> Self {
        if err.is_not_found() {
            return ApiError::NotFound(err.to_string());
        }
        match err {
            linkshelf_core::Error::InvalidInput(msg) => ApiError::BadRequest(msg),
            other => ApiError::Internal(other),
        }
    }
}

/// Malformed, mistyped or incomplete JSON bodies.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return ApiError::PayloadTooLarge(rejection.body_text());
        }
        ApiError::BadRequest(rejection.body_text())
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::Internal(err) => {
                tracing::error!(subsystem = "api", error = %err, "Request failed");
                "Internal server error".to_string()
            }
            ApiError::NotFound(msg)
            | ApiError::BadRequest(msg)
            | ApiError::PayloadTooLarge(msg) => msg,
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
