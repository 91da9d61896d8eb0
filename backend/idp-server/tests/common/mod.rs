#![allow(dead_code)]

//! Test infrastructure for idp-server API tests

use idp_server::AppState;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::Duration;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

pub const TEST_SECRET: &[u8] = b"integration-secret-at-least-32-bytes";

/// Create AppState over a migrated in-memory store
pub async fn create_test_app_state() -> AppState {
    let pool = idp_db::open_in_memory_store()
        .await
        .expect("Failed to create test store");

    AppState::new(pool, TEST_SECRET, Duration::days(7))
}

/// Build a POST request with a JSON body
pub fn json_request(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Build a GET /me request with an optional Authorization header
pub fn me_request(authorization: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri("/me");
    if let Some(value) = authorization {
        builder = builder.header("Authorization", value);
    }
    builder.body(Body::empty()).unwrap()
}

/// Send one request through the router, returning status and raw body text
pub async fn send_raw(app: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

/// Send one request through the router, parsing the body as JSON
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, body) = send_raw(app, request).await;
    (status, serde_json::from_str(&body).unwrap())
}

pub fn ann() -> Value {
    json!({
        "name": "Ann",
        "username": "ann1",
        "email": "ann@x.io",
        "password": "pw",
    })
}

/// Register Ann and return the issued token
pub async fn register_ann(app: &Router) -> String {
    let (status, json) = send(app, json_request("/signup", &ann())).await;
    assert_eq!(status, StatusCode::OK);
    json["token"].as_str().unwrap().to_string()
}
