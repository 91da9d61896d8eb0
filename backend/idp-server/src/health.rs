use crate::{ApiError, AppState};

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

pub const SERVICE_NAME: &str = "Auth Service";
pub const STORE_UNAVAILABLE: &str = "Store unavailable";

/// GET /health - service liveness with its name
pub async fn health() -> Response {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "service": SERVICE_NAME })),
    )
        .into_response()
}

/// GET /live - is the process alive?
pub async fn liveness() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - can the credential store answer a query?
pub async fn readiness(State(state): State<AppState>) -> Response {
    match idp_db::ping(&state.pool).await {
        Ok(()) => (StatusCode::OK, "Ready").into_response(),
        Err(e) => {
            log::error!("Readiness check failed: {}", e);
            ApiError::unavailable(STORE_UNAVAILABLE).into_response()
        }
    }
}
