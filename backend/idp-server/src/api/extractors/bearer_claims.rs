//! Axum extractor for bearer-token authentication

use crate::api::error::{INVALID_OR_EXPIRED_TOKEN, NO_TOKEN_PROVIDED};
use crate::{ApiError, AppState};

use idp_auth::{Claims, TokenVerification, token_from_authorization};

use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

/// Verified claims from the `Authorization: <scheme> <token>` header
///
/// The scheme word is not checked. A missing header, a header that is not
/// valid UTF-8, or one without a token part rejects with "No token
/// provided"; every verification failure rejects with "Invalid or expired
/// token".
#[derive(Debug)]
pub struct BearerClaims(pub Claims);

impl FromRequestParts<AppState> for BearerClaims {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let token = parts
                .headers
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok())
                .and_then(token_from_authorization)
                .ok_or_else(|| ApiError::unauthorized(NO_TOKEN_PROVIDED))?;

            match state.validator.verify(token) {
                TokenVerification::Valid(claims) => {
                    log::debug!("Token accepted for {}", claims.username());
                    Ok(BearerClaims(claims))
                }
                TokenVerification::Invalid(reason) => {
                    log::warn!("Token rejected: {}", reason);
                    Err(ApiError::unauthorized(INVALID_OR_EXPIRED_TOKEN))
                }
            }
        }
    }
}
