pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::identity::Identity;
pub use models::new_identity::NewIdentity;
pub use models::registration::Registration;
