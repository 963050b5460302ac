//! Application configuration domain model

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "https://api.thecoincartel.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Application configuration
///
/// Missing sections and keys fall back to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Remote API settings
    pub api: ApiConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

/// Remote API configuration
///
/// Custom `Debug` implementation redacts the `auth_token` field.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL the `/api/...` paths are resolved against
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Bearer token sent with every request, if set
    pub auth_token: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            auth_token: None,
        }
    }
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("auth_token", &self.auth_token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Also write logs to a daily rolling file in the log directory
    pub file: bool,
}

/// Errors from turning a config document into an [`AppConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config document: {0}")]
    Parse(#[from] toml::de::Error),
}

impl AppConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.api.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn wrong_value_type_is_a_parse_error() {
        let err = AppConfig::from_toml_str("[api]\ntimeout_secs = \"soon\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            [api]
            auth_token = "t0ken"

            [logging]
            file = true
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.api.auth_token.as_deref(), Some("t0ken"));
        assert!(config.logging.file);
    }

    #[test]
    fn debug_redacts_auth_token() {
        let api = ApiConfig {
            auth_token: Some("super-secret".into()),
            ..Default::default()
        };
        let debug = format!("{api:?}");
        assert!(!debug.contains("super-secret"));
    }
}
