//! Salted one-way password hashing (Argon2id, PHC string output).

use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use error_location::ErrorLocation;

/// Well-formed Argon2id hash (default parameters) that no password matches.
///
/// Verifying against it costs the same as verifying a real stored hash.
pub const DUMMY_PASSWORD_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$VwEokvqRjx6yepgK3ZOhJA$+9ZukUEGCz7yS0TMMSC62MGeEGR8jDPB+ZPPv6SDx2o";

/// Hash a plaintext password with a fresh random salt
#[track_caller]
pub fn hash_password(plaintext: &str) -> AuthErrorResult<String> {
    let location = Location::caller();
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(plaintext.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::PasswordHash {
            message: e.to_string(),
            location: ErrorLocation::from(location),
        })
}

/// Verify a plaintext password against a stored hash.
///
/// A hash that does not parse is treated as a mismatch.
pub fn verify_password(plaintext: &str, hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        log::warn!("Stored password hash is not a valid PHC string");
        return false;
    };

    Argon2::default()
        .verify_password(plaintext.as_bytes(), &parsed)
        .is_ok()
}
