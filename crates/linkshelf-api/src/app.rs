//! Router construction and HTTP middleware.

use std::time::Duration;

use axum::{
    http::{header, Method},
    routing::{get, post, put},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, CorsLayer},
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    trace::TraceLayer,
};
use uuid::Uuid;

use crate::config::ApiConfig;
use crate::handlers::{bookmarks, health, users};
use crate::openapi::openapi_json;
use crate::AppState;

/// Generates time-ordered UUIDv7 request correlation IDs.
#[derive(Clone, Default)]
struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string().parse().ok()?;
        Some(RequestId::new(id))
    }
}

fn cors_layer(config: &ApiConfig) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(config.allowed_origins.clone()))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600))
}

/// Build the application router with all routes and middleware.
pub fn build_router(state: AppState, config: &ApiConfig) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/openapi.json", get(openapi_json))
        .route("/bookmarks/create", post(bookmarks::create_bookmark))
        .route(
            "/bookmarks",
            get(bookmarks::list_bookmarks).delete(bookmarks::delete_all_bookmarks),
        )
        .route(
            "/bookmarks/:id",
            put(bookmarks::update_bookmark).delete(bookmarks::delete_bookmark),
        )
        .route("/users/:id", get(users::get_user))
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
        .layer(cors_layer(config))
        .layer(RequestBodyLimitLayer::new(config.max_body_bytes))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Repositories;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use linkshelf_core::Bookmark;
    use tower::ServiceExt;

    fn test_router() -> Router {
        build_router(
            AppState::new(Repositories::memory()),
            &ApiConfig::default(),
        )
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = test_router()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "healthy");
    }

    #[tokio::test]
    async fn test_request_id_is_set() {
        let response = test_router()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let id = response
            .headers()
            .get("x-request-id")
            .expect("request id header");
        assert!(Uuid::parse_str(id.to_str().unwrap()).is_ok());
    }

    #[tokio::test]
    async fn test_request_id_is_propagated() {
        let response = test_router()
            .oneshot(
                Request::get("/health")
                    .header("x-request-id", "client-supplied")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.headers()["x-request-id"], "client-supplied");
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let router = test_router();

        let response = router
            .clone()
            .oneshot(
                Request::post("/bookmarks/create")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{"title":"Rust","url":"https://www.rust-lang.org","tags":"lang"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = router
            .oneshot(Request::get("/bookmarks").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let listed: Vec<Bookmark> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title, "Rust");
    }

    #[tokio::test]
    async fn test_oversized_body_rejected() {
        let config = ApiConfig {
            max_body_bytes: 16,
            ..ApiConfig::default()
        };
        let router = build_router(AppState::new(Repositories::memory()), &config);

        let payload = r#"{"title":"a long enough title","url":"https://example.com","tags":""}"#;
        let response = router
            .oneshot(
                Request::post("/bookmarks/create")
                    .header(header::CONTENT_TYPE, "application/json")
                    .header(header::CONTENT_LENGTH, payload.len())
                    .body(Body::from(payload))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_cors_allows_configured_origin() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/bookmarks")
                    .header(header::ORIGIN, "http://localhost:3000")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:3000"
        );
        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .is_none());
    }

    #[tokio::test]
    async fn test_openapi_served() {
        let response = test_router()
            .oneshot(Request::get("/openapi.json").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert!(json["paths"]["/bookmarks"].is_object());
    }
}
