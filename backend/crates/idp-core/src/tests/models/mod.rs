mod identity;
mod registration;
