pub mod auth_response;
#[allow(clippy::module_inception)]
pub mod identities;
pub mod identity_dto;
pub mod login_request;
pub mod register_request;
