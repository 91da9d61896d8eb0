use crate::BearerClaims;
use crate::api::error::{INVALID_OR_EXPIRED_TOKEN, NO_TOKEN_PROVIDED};
use crate::tests::{create_test_state, test_identity};
use crate::ApiError;

use idp_auth::JwtIssuer;

use axum::{body::Body, extract::FromRequestParts, http::Request};
use chrono::Duration;

async fn extract(authorization: Option<&str>) -> Result<BearerClaims, ApiError> {
    let state = create_test_state().await;
    extract_with(&state, authorization).await
}

async fn extract_with(
    state: &crate::AppState,
    authorization: Option<&str>,
) -> Result<BearerClaims, ApiError> {
    let mut builder = Request::builder();
    if let Some(value) = authorization {
        builder = builder.header("Authorization", value);
    }
    let request = builder.body(Body::empty()).unwrap();

    let (mut parts, _body) = request.into_parts();
    BearerClaims::from_request_parts(&mut parts, state).await
}

fn unauthorized_message(result: Result<BearerClaims, ApiError>) -> String {
    match result {
        Err(ApiError::Unauthorized { message, .. }) => message,
        other => panic!("Expected Unauthorized, got {:?}", other),
    }
}

#[tokio::test]
async fn test_extractor_with_valid_bearer_token() {
    let state = create_test_state().await;
    let identity = test_identity();
    let token = state.issuer.issue(&identity).unwrap();

    let result = extract_with(&state, Some(format!("Bearer {token}").as_str())).await;

    let BearerClaims(claims) = result.unwrap();
    assert_eq!(claims.sub, "ann1");
    assert_eq!(claims.identity_id(), Some(identity.id));
}

#[tokio::test]
async fn test_extractor_accepts_any_scheme_word() {
    let state = create_test_state().await;
    let token = state.issuer.issue(&test_identity()).unwrap();

    let result = extract_with(&state, Some(format!("Token {token}").as_str())).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_extractor_rejects_missing_header() {
    let message = unauthorized_message(extract(None).await);

    assert_eq!(message, NO_TOKEN_PROVIDED);
}

#[tokio::test]
async fn test_extractor_rejects_header_without_token_part() {
    let message = unauthorized_message(extract(Some("Bearer")).await);

    assert_eq!(message, NO_TOKEN_PROVIDED);
}

#[tokio::test]
async fn test_extractor_rejects_garbage_token() {
    let message = unauthorized_message(extract(Some("Bearer not.a.jwt")).await);

    assert_eq!(message, INVALID_OR_EXPIRED_TOKEN);
}

#[tokio::test]
async fn test_extractor_rejects_expired_token() {
    let state = create_test_state().await;
    let token = state
        .issuer
        .issue_with_ttl(&test_identity(), Duration::seconds(-60))
        .unwrap();

    let authorization = format!("Bearer {token}");
    let message = unauthorized_message(extract_with(&state, Some(authorization.as_str())).await);

    assert_eq!(message, INVALID_OR_EXPIRED_TOKEN);
}

#[tokio::test]
async fn test_extractor_rejects_token_signed_with_other_secret() {
    let state = create_test_state().await;
    let foreign =
        JwtIssuer::with_hs256(b"another-secret-that-is-32-bytes-long!!", Duration::days(1));
    let token = foreign.issue(&test_identity()).unwrap();

    let authorization = format!("Bearer {token}");
    let message = unauthorized_message(extract_with(&state, Some(authorization.as_str())).await);

    assert_eq!(message, INVALID_OR_EXPIRED_TOKEN);
}
