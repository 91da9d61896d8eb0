use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_TOKEN_TTL_DAYS, MAX_TOKEN_TTL_DAYS,
    MIN_JWT_SECRET_LENGTH, MIN_TOKEN_TTL_DAYS,
};

use std::fmt;

use chrono::Duration;
use serde::Deserialize;

/// Token signing settings
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret, required
    pub jwt_secret: Option<String>,
    /// Lifetime of issued tokens
    pub token_ttl_days: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl_days: DEFAULT_TOKEN_TTL_DAYS,
        }
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field(
                "jwt_secret",
                &self.jwt_secret.as_ref().map(|_| "<redacted>"),
            )
            .field("token_ttl_days", &self.token_ttl_days)
            .finish()
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match &self.jwt_secret {
            None => {
                return Err(ConfigError::auth(
                    "auth.jwt_secret is required (set IDP_AUTH_JWT_SECRET)",
                ));
            }
            Some(secret) if secret.chars().count() < MIN_JWT_SECRET_LENGTH => {
                return Err(ConfigError::auth(format!(
                    "auth.jwt_secret must be at least {} characters",
                    MIN_JWT_SECRET_LENGTH
                )));
            }
            Some(_) => {}
        }

        if !(MIN_TOKEN_TTL_DAYS..=MAX_TOKEN_TTL_DAYS).contains(&self.token_ttl_days) {
            return Err(ConfigError::auth(format!(
                "auth.token_ttl_days must be {}-{}, got {}",
                MIN_TOKEN_TTL_DAYS, MAX_TOKEN_TTL_DAYS, self.token_ttl_days
            )));
        }

        Ok(())
    }

    /// Token lifetime as a duration
    pub fn token_ttl(&self) -> Duration {
        Duration::days(self.token_ttl_days)
    }
}
