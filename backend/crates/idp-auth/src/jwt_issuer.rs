use crate::{AuthError, Claims, Result as AuthErrorResult};

use idp_core::Identity;

use std::panic::Location;

use chrono::{Duration, Utc};
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

/// Signs identity tokens with a shared HS256 secret
pub struct JwtIssuer {
    encoding_key: EncodingKey,
    header: Header,
    ttl: Duration,
}

impl JwtIssuer {
    /// Create issuer with HS256 (symmetric secret) and a default time-to-live
    pub fn with_hs256(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            header: Header::new(Algorithm::HS256),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a token for `identity` using the configured TTL
    #[track_caller]
    pub fn issue(&self, identity: &Identity) -> AuthErrorResult<String> {
        self.issue_with_ttl(identity, self.ttl)
    }

    /// Issue a token for `identity` that expires `ttl` from now
    #[track_caller]
    pub fn issue_with_ttl(&self, identity: &Identity, ttl: Duration) -> AuthErrorResult<String> {
        let location = Location::caller();
        let claims = Claims::for_identity(identity, Utc::now(), ttl);

        encode(&self.header, &claims, &self.encoding_key).map_err(|e| AuthError::TokenEncode {
            source: e,
            location: ErrorLocation::from(location),
        })
    }
}
