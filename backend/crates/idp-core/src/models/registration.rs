//! Registration input after presence validation.

use crate::{CoreError, ErrorLocation, NewIdentity, Result as CoreResult};

use std::fmt;
use std::panic::Location;

pub const ALL_FIELDS_REQUIRED: &str = "All fields are required";

/// A sign-up request whose four fields are known to be present and non-empty.
#[derive(Clone, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub username: String,
    pub email: String,
    password: String,
}

impl Registration {
    /// Build a registration, rejecting any missing or empty field.
    ///
    /// Whitespace-only values are accepted as-is; no trimming or format
    /// checks are applied.
    #[track_caller]
    pub fn new(
        name: Option<String>,
        username: Option<String>,
        email: Option<String>,
        password: Option<String>,
    ) -> CoreResult<Self> {
        let location = Location::caller();

        let name = Self::required("name", name, location)?;
        let username = Self::required("username", username, location)?;
        let email = Self::required("email", email, location)?;
        let password = Self::required("password", password, location)?;

        Ok(Self {
            name,
            username,
            email,
            password,
        })
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Swap the plaintext password for its hash
    pub fn into_new_identity(self, password_hash: String) -> NewIdentity {
        NewIdentity {
            name: self.name,
            username: self.username,
            email: self.email,
            password_hash,
        }
    }

    fn required(
        field: &str,
        value: Option<String>,
        location: &'static Location<'static>,
    ) -> CoreResult<String> {
        match value {
            Some(v) if !v.is_empty() => Ok(v),
            _ => Err(CoreError::Validation {
                message: ALL_FIELDS_REQUIRED.to_string(),
                field: Some(field.to_string()),
                location: ErrorLocation::from(location),
            }),
        }
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("name", &self.name)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
