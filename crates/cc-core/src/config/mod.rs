//! Configuration domain models

mod app_config;

pub use app_config::{
    ApiConfig, AppConfig, ConfigError, LoggingConfig, DEFAULT_API_BASE_URL, DEFAULT_TIMEOUT_SECS,
};
