use crate::Claims;

use std::fmt;

/// Why a token was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidTokenReason {
    /// Not a decodable JWT, or signed with an unexpected algorithm
    Malformed,
    BadSignature,
    Expired,
    /// Signature checked out but a required claim is empty
    InvalidClaim,
}

impl fmt::Display for InvalidTokenReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::Malformed => "malformed token",
            Self::BadSignature => "signature mismatch",
            Self::Expired => "token expired",
            Self::InvalidClaim => "invalid claim",
        };
        f.write_str(reason)
    }
}

/// Outcome of verifying a bearer token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenVerification {
    Valid(Claims),
    Invalid(InvalidTokenReason),
}

impl TokenVerification {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Collapse every rejection reason into `None`
    pub fn into_claims(self) -> Option<Claims> {
        match self {
            Self::Valid(claims) => Some(claims),
            Self::Invalid(_) => None,
        }
    }
}
