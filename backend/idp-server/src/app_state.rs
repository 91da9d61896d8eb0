use idp_auth::{JwtIssuer, JwtValidator};

use std::sync::Arc;

use chrono::Duration;
use sqlx::SqlitePool;

/// Shared, read-only state handed to every request
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub issuer: Arc<JwtIssuer>,
    pub validator: Arc<JwtValidator>,
}

impl AppState {
    /// Issuer and validator share one HS256 secret
    pub fn new(pool: SqlitePool, jwt_secret: &[u8], token_ttl: Duration) -> Self {
        Self {
            pool,
            issuer: Arc::new(JwtIssuer::with_hs256(jwt_secret, token_ttl)),
            validator: Arc::new(JwtValidator::with_hs256(jwt_secret)),
        }
    }
}
