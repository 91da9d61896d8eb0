//! Identity entity - the single record type held by the credential store.

use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A registered identity.
///
/// `password_hash` is an Argon2 PHC string. The type is deliberately not
/// `Serialize`; responses go through a DTO that omits the hash.
#[derive(Clone, PartialEq, Eq)]
pub struct Identity {
    /// Assigned by the store at insert, never changes afterwards
    pub id: Uuid,
    pub name: String,
    /// Unique login handle
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Identity")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .field("created_at", &self.created_at)
            .finish()
    }
}
