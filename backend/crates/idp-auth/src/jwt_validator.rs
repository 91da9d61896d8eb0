use crate::{Claims, InvalidTokenReason, TokenVerification};

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, errors::ErrorKind};
use log::debug;

/// Verifies HS256 identity tokens
pub struct JwtValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtValidator {
    /// Create validator with HS256 (symmetric secret)
    pub fn with_hs256(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp"]);
        // Tokens are invalid the moment `exp` passes
        validation.leeway = 0;

        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Check signature, expiry and claims. Any failed check rejects the token.
    pub fn verify(&self, token: &str) -> TokenVerification {
        let token_data = match decode::<Claims>(token, &self.decoding_key, &self.validation) {
            Ok(data) => data,
            Err(e) => {
                let reason = match e.kind() {
                    ErrorKind::ExpiredSignature => InvalidTokenReason::Expired,
                    ErrorKind::InvalidSignature => InvalidTokenReason::BadSignature,
                    _ => InvalidTokenReason::Malformed,
                };
                debug!("JWT rejected ({}): {}", reason, e);
                return TokenVerification::Invalid(reason);
            }
        };

        if let Err(e) = token_data.claims.validate() {
            debug!("JWT rejected: {}", e);
            return TokenVerification::Invalid(InvalidTokenReason::InvalidClaim);
        }

        TokenVerification::Valid(token_data.claims)
    }

    /// Get the algorithm being used (for logging/debugging)
    pub fn algorithm(&self) -> &'static str {
        "HS256"
    }
}
