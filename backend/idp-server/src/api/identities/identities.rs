//! Identity REST API handlers
//!
//! Registration, login and current-identity lookup. Password hashing and
//! verification run on the blocking pool.

use crate::api::error::{
    INVALID_CREDENTIALS, INVALID_OR_EXPIRED_TOKEN, USER_NOT_FOUND, USERNAME_TAKEN,
};
use crate::{
    ApiError, ApiResult, AppState, AuthResponse, BearerClaims, IdentityDto, LoginRequest,
    RegisterRequest,
};

use idp_auth::{DUMMY_PASSWORD_HASH, hash_password, verify_password};
use idp_core::Registration;
use idp_db::IdentityRepository;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use log::{info, warn};

// =============================================================================
// Handlers
// =============================================================================

/// POST /signup (alias POST /register)
///
/// Create an identity and return a token for it
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> ApiResult<Json<AuthResponse>> {
    let Json(request) = payload?;

    let registration = Registration::new(
        request.name,
        request.username,
        request.email,
        request.password,
    )?;

    let repo = IdentityRepository::new(state.pool.clone());
    if repo.exists_by_username(&registration.username).await? {
        return Err(ApiError::conflict(USERNAME_TAKEN));
    }

    let password_hash = hash_off_runtime(registration.password().to_owned()).await?;
    let identity = repo
        .create(registration.into_new_identity(password_hash))
        .await?;

    let token = state.issuer.issue(&identity)?;
    info!("Registered {} ({})", identity.username, identity.id);

    Ok(Json(AuthResponse {
        token,
        user: identity.into(),
    }))
}

/// POST /login
///
/// Exchange username and password for a token. Unknown usernames and wrong
/// passwords are indistinguishable to the caller.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<AuthResponse>> {
    let Json(request) = payload?;

    let repo = IdentityRepository::new(state.pool.clone());
    let identity = match request.username.as_deref() {
        Some(username) => repo.find_by_username(username).await?,
        None => None,
    };

    // Unknown usernames still pay for a full Argon2 verification
    let password_hash = identity
        .as_ref()
        .map_or(DUMMY_PASSWORD_HASH, |identity| identity.password_hash.as_str())
        .to_owned();
    let password = request.password.unwrap_or_default();
    let verified = verify_off_runtime(password, password_hash).await?;

    let Some(identity) = identity.filter(|_| verified) else {
        warn!("Login rejected for {:?}", request.username);
        return Err(ApiError::unauthorized(INVALID_CREDENTIALS));
    };

    let token = state.issuer.issue(&identity)?;
    info!("Logged in {} ({})", identity.username, identity.id);

    Ok(Json(AuthResponse {
        token,
        user: identity.into(),
    }))
}

/// GET /me
///
/// Return the identity named by the bearer token's `id` claim
pub async fn me(
    State(state): State<AppState>,
    BearerClaims(claims): BearerClaims,
) -> ApiResult<Json<IdentityDto>> {
    let identity_id = claims
        .identity_id()
        .ok_or_else(|| ApiError::unauthorized(INVALID_OR_EXPIRED_TOKEN))?;

    let repo = IdentityRepository::new(state.pool.clone());
    let identity = repo
        .find_by_id(identity_id)
        .await?
        .ok_or_else(|| ApiError::not_found(USER_NOT_FOUND))?;

    Ok(Json(identity.into()))
}

// =============================================================================
// Helpers
// =============================================================================

async fn hash_off_runtime(password: String) -> ApiResult<String> {
    let hashed = tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| ApiError::internal(format!("Hashing task failed: {e}")))?;

    Ok(hashed?)
}

async fn verify_off_runtime(password: String, password_hash: String) -> ApiResult<bool> {
    tokio::task::spawn_blocking(move || verify_password(&password, &password_hash))
        .await
        .map_err(|e| ApiError::internal(format!("Verification task failed: {e}")))
}
