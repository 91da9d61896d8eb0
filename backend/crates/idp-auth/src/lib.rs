pub mod authorization_header;
pub mod claims;
pub mod error;
pub mod jwt_issuer;
pub mod jwt_validator;
pub mod password;
pub mod token_verification;

pub use authorization_header::token_from_authorization;
pub use claims::Claims;
pub use error::{AuthError, Result};
pub use jwt_issuer::JwtIssuer;
pub use jwt_validator::JwtValidator;
pub use password::{DUMMY_PASSWORD_HASH, hash_password, verify_password};
pub use token_verification::{InvalidTokenReason, TokenVerification};

#[cfg(test)]
mod tests;
