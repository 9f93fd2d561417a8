#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use axum::http::HeaderValue;
use soundverse_api::config::{CorsOrigins, DatabaseConfig, ServerConfig};
use soundverse_api::router::build_app_router;
use soundverse_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// The database URL is never used: tests hand in the pool provisioned by
/// `#[sqlx::test]`.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: CorsOrigins::List(vec![HeaderValue::from_static("http://localhost:3000")]),
        request_timeout_secs: 30,
        database: DatabaseConfig {
            url: "postgres://unused".to_string(),
            max_connections: 1,
            connect_timeout_secs: 1,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_router(AppState { pool }, &test_config())
}

/// Same as [`build_test_app`] but with a custom CORS policy.
pub fn build_test_app_with_cors(pool: PgPool, cors_origins: CorsOrigins) -> Router {
    let config = ServerConfig {
        cors_origins,
        ..test_config()
    };
    build_app_router(AppState { pool }, &config)
}

/// Send a request without a body.
pub async fn send(app: Router, method: Method, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a request with a raw body and an explicit content type.
pub async fn send_raw(
    app: Router,
    method: Method,
    uri: &str,
    content_type: &str,
    body: &str,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", content_type)
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send_raw(app, Method::POST, uri, "application/json", &json.to_string()).await
}

pub async fn put_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send_raw(app, Method::PUT, uri, "application/json", &json.to_string()).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
