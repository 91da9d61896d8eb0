use crate::IdentityDto;

use serde::Serialize;

/// Register and login response
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: IdentityDto,
}
