pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::store::{open_in_memory_store, open_store, ping, run_migrations};
pub use error::{DbError, Result};
pub use repositories::identity_repository::IdentityRepository;
