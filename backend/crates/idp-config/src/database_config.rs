use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_DATABASE_NAME, DEFAULT_DATABASE_URI,
    IN_MEMORY_DATABASE_URI,
};

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Where the credential store lives.
///
/// `uri` is a directory relative to the config dir (or `:memory:`), `name`
/// is the store file stem.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub uri: String,
    pub name: String,
}

/// Resolved store location
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    InMemory,
    File(PathBuf),
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            uri: String::from(DEFAULT_DATABASE_URI),
            name: String::from(DEFAULT_DATABASE_NAME),
        }
    }
}

impl DatabaseConfig {
    pub fn is_in_memory(&self) -> bool {
        self.uri == IN_MEMORY_DATABASE_URI
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.is_in_memory() {
            let uri = Path::new(&self.uri);
            if uri.is_absolute() || self.uri.contains("..") {
                return Err(ConfigError::database(
                    "database.uri must be relative and cannot contain '..'",
                ));
            }
        }

        if self.name.is_empty() {
            return Err(ConfigError::database("database.name cannot be empty"));
        }

        if self.name.contains(['/', '\\']) || self.name.contains("..") {
            return Err(ConfigError::database(
                "database.name must be a plain name without path separators",
            ));
        }

        Ok(())
    }

    /// Resolve the store location against the config directory
    pub fn location(&self, config_dir: &Path) -> StoreLocation {
        if self.is_in_memory() {
            StoreLocation::InMemory
        } else {
            StoreLocation::File(
                config_dir
                    .join(&self.uri)
                    .join(format!("{}.db", self.name)),
            )
        }
    }
}
