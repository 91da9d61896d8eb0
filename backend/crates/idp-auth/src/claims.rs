use crate::{AuthError, Result as AuthErrorResult};

use idp_core::Identity;

use std::panic::Location;

use chrono::{DateTime, Duration, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims carried by every issued token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Identity id (UUID string)
    pub id: String,
    /// Subject (username)
    pub sub: String,
    pub email: String,
    pub name: String,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    #[serde(default)]
    pub iat: i64,
}

impl Claims {
    /// Build the claim set for `identity`, expiring `ttl` after `issued_at`
    pub fn for_identity(identity: &Identity, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            id: identity.id.to_string(),
            sub: identity.username.clone(),
            email: identity.email.clone(),
            name: identity.name.clone(),
            exp: (issued_at + ttl).timestamp(),
            iat: issued_at.timestamp(),
        }
    }

    pub fn username(&self) -> &str {
        &self.sub
    }

    /// Parsed identity id, `None` if the claim is not a UUID
    pub fn identity_id(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.id).ok()
    }

    /// Validate claims after JWT signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.id.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "id".to_string(),
                message: "id cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.sub.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub (username) cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
