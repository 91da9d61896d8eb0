pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    extractors::bearer_claims::BearerClaims,
    identities::{
        auth_response::AuthResponse,
        identities::{login, me, register},
        identity_dto::IdentityDto,
        login_request::LoginRequest,
        register_request::RegisterRequest,
    },
};
pub use app_state::AppState;

pub use crate::routes::build_router;
