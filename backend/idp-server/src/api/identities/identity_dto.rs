use idp_core::Identity;

use serde::Serialize;

/// Public view of an identity; the password hash never leaves the store
#[derive(Debug, Serialize)]
pub struct IdentityDto {
    pub id: String,
    pub name: String,
    pub username: String,
    pub email: String,
}

impl From<Identity> for IdentityDto {
    fn from(identity: Identity) -> Self {
        Self {
            id: identity.id.to_string(),
            name: identity.name,
            username: identity.username,
            email: identity.email,
        }
    }
}
