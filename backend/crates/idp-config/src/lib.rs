mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;


pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::{DatabaseConfig, StoreLocation};
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

const CONFIG_DIR_ENV: &str = "IDP_CONFIG_DIR";
const DEFAULT_CONFIG_DIRECTORY: &str = ".idp";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8001;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_URI: &str = "data";
const DEFAULT_DATABASE_NAME: &str = "auth_service";
const IN_MEMORY_DATABASE_URI: &str = ":memory:";

const DEFAULT_TOKEN_TTL_DAYS: i64 = 7;
const MIN_TOKEN_TTL_DAYS: i64 = 1;
const MAX_TOKEN_TTL_DAYS: i64 = 365;
const MIN_JWT_SECRET_LENGTH: usize = 32;

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
