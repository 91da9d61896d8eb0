use crate::ApiError;
use crate::api::error::{INTERNAL_SERVER_ERROR, USERNAME_TAKEN};

use idp_core::{CoreError, Registration};
use idp_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_flat_error_body() {
    let (status, json) = body_json(ApiError::not_found("User not found")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, serde_json::json!({ "error": "User not found" }));
}

#[tokio::test]
async fn test_validation_error_returns_400_without_field_in_body() {
    let error = ApiError::Validation {
        message: "All fields are required".into(),
        field: Some("email".into()),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, serde_json::json!({ "error": "All fields are required" }));
}

#[tokio::test]
async fn test_conflict_returns_400() {
    let (status, json) = body_json(ApiError::conflict(USERNAME_TAKEN)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], USERNAME_TAKEN);
}

#[tokio::test]
async fn test_unauthorized_returns_401() {
    let (status, json) = body_json(ApiError::unauthorized("No token provided")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"], "No token provided");
}

#[tokio::test]
async fn test_unavailable_returns_503() {
    let (status, json) = body_json(ApiError::unavailable("Store unavailable")).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["error"], "Store unavailable");
}

#[tokio::test]
async fn test_internal_error_returns_500_and_hides_details() {
    let (status, json) = body_json(ApiError::internal("disk I/O error at page 7")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], INTERNAL_SERVER_ERROR);
}

#[test]
fn test_core_validation_error_converts_to_validation() {
    let core_err: CoreError = Registration::new(None, None, None, None).unwrap_err();
    let api_err: ApiError = core_err.into();

    match api_err {
        ApiError::Validation { message, field, .. } => {
            assert_eq!(message, "All fields are required");
            assert_eq!(field.as_deref(), Some("name"));
        }
        _ => panic!("Expected Validation error"),
    }
}

#[test]
fn test_unique_violation_converts_to_username_conflict() {
    let db_err = DbError::UniqueViolation {
        field: "username".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let api_err: ApiError = db_err.into();

    match api_err {
        ApiError::Conflict { message, .. } => assert_eq!(message, USERNAME_TAKEN),
        _ => panic!("Expected Conflict error"),
    }
}

#[test]
fn test_other_store_errors_convert_to_internal() {
    let db_err = DbError::Initialization {
        message: "cannot open".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let api_err: ApiError = db_err.into();

    assert_eq!(api_err.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
