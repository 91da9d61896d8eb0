pub mod identity;
pub mod new_identity;
pub mod registration;
