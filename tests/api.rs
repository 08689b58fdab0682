//! Router-level tests that need no live database: health, the API document,
//! and request paths that are rejected before the pool is touched.
//!
//! The pool is created with `connect_lazy`, so nothing here opens a
//! connection. Requests go through `tower::ServiceExt::oneshot` without a
//! network server.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use bistro::{app_router, AppState};

fn test_app() -> Router {
    let pool = sqlx::postgres::PgPoolOptions::new()
        .connect_lazy("postgres://localhost/bistro_test")
        .expect("lazy pool");
    app_router(AppState::new(pool, "http://127.0.0.1:3000"))
}

async fn get(app: &Router, path: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn post_json(app: &Router, path: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn health_is_ok() {
    let app = test_app();
    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn api_doc_is_served() {
    let app = test_app();
    let (status, body) = get(&app, "/api/doc").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["openapi"].is_string());
    assert!(body["paths"].get("/api/restaurant").is_some());
    assert!(body["paths"].get("/api/restaurant/{id}").is_some());
}

#[tokio::test]
async fn version_reports_the_crate() {
    let app = test_app();
    let (status, body) = get(&app, "/version").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "bistro");
}

#[tokio::test]
async fn create_rejects_blank_name() {
    let app = test_app();
    let (status, body) = post_json(
        &app,
        "/api/restaurant",
        json!({"name": "  ", "description": "Bienvenue", "maxGuest": 4}),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "validation_error");
}

#[tokio::test]
async fn create_rejects_non_positive_max_guest() {
    let app = test_app();
    let (status, body) = post_json(
        &app,
        "/api/restaurant",
        json!({"name": "My restaurant", "description": "Bienvenue", "maxGuest": 0}),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("maxGuest"));
}

#[tokio::test]
async fn non_numeric_id_is_a_bad_request() {
    let app = test_app();
    let (status, body) = get(&app, "/api/restaurant/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "bad_request");
}
