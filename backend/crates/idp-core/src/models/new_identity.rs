use crate::Identity;

use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// An identity that has not been persisted yet (no id).
#[derive(Clone, PartialEq, Eq)]
pub struct NewIdentity {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

impl NewIdentity {
    /// Attach the store-assigned id and creation time
    pub fn into_identity(self, id: Uuid, created_at: DateTime<Utc>) -> Identity {
        Identity {
            id,
            name: self.name,
            username: self.username,
            email: self.email,
            password_hash: self.password_hash,
            created_at,
        }
    }
}

impl fmt::Debug for NewIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewIdentity")
            .field("name", &self.name)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}
