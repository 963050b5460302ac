//! # Configuration Loader
//!
//! Reads the TOML config file and applies environment overrides.
//! Missing keys take the defaults of [`AppConfig`]; nothing here checks
//! whether the values make sense. The base URL is validated when the HTTP
//! client is built.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::debug;

use cc_core::config::AppConfig;

pub const CONFIG_DIR_NAME: &str = "coin-cartel";
pub const CONFIG_FILE_NAME: &str = "onboard.toml";

pub const ENV_API_BASE_URL: &str = "CARTEL_API_BASE_URL";
pub const ENV_API_TOKEN: &str = "CARTEL_API_TOKEN";
pub const ENV_API_TIMEOUT_SECS: &str = "CARTEL_API_TIMEOUT_SECS";

/// `<config dir>/coin-cartel/onboard.toml`, when the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Load configuration from a TOML file
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML for
/// [`AppConfig`].
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    AppConfig::from_toml_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", config_path.display()))
}

/// Build the effective configuration.
///
/// An explicit path must exist. The default path is optional; without it
/// the built-in defaults are used. Environment variables win over the file.
pub fn resolve_config(explicit_path: Option<PathBuf>) -> anyhow::Result<AppConfig> {
    let mut config = match explicit_path {
        Some(path) => load_config(&path)?,
        None => match default_config_path().filter(|path| path.exists()) {
            Some(path) => load_config(&path)?,
            None => {
                debug!("no config file found, using defaults");
                AppConfig::default()
            }
        },
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
    Ok(config)
}

/// Apply `CARTEL_API_*` overrides read through `lookup`. Blank values are
/// ignored.
pub fn apply_env_overrides(
    config: &mut AppConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<()> {
    let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    if let Some(base_url) = get(ENV_API_BASE_URL) {
        config.api.base_url = base_url.trim().to_string();
    }
    if let Some(token) = get(ENV_API_TOKEN) {
        config.api.auth_token = Some(token.trim().to_string());
    }
    if let Some(timeout) = get(ENV_API_TIMEOUT_SECS) {
        config.api.timeout_secs = timeout
            .trim()
            .parse()
            .with_context(|| format!("{ENV_API_TIMEOUT_SECS} must be a whole number of seconds, got {timeout:?}"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    use cc_core::config::{DEFAULT_API_BASE_URL, DEFAULT_TIMEOUT_SECS};

    fn write_config(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(content.as_bytes()).unwrap();
        temp_file
    }

    #[test]
    fn test_load_config_reads_valid_toml() {
        let temp_file = write_config(
            r#"
            [api]
            base_url = "https://staging.example.com"
            timeout_secs = 5
            auth_token = "abc"

            [logging]
            file = true
        "#,
        );

        let config = load_config(temp_file.path()).unwrap();

        assert_eq!(config.api.base_url, "https://staging.example.com");
        assert_eq!(config.api.timeout_secs, 5);
        assert_eq!(config.api.auth_token.as_deref(), Some("abc"));
        assert!(config.logging.file);
    }

    #[test]
    fn test_load_config_fills_missing_keys_with_defaults() {
        let temp_file = write_config("[api]\n");

        let config = load_config(temp_file.path()).unwrap();

        assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.api.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(!config.logging.file);
    }

    #[test]
    fn test_load_config_reports_missing_file() {
        let err = load_config(Path::new("/this/path/does/not/exist/onboard.toml")).unwrap_err();
        assert!(
            err.to_string().contains("Failed to read config file"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn test_load_config_reports_invalid_toml() {
        let temp_file = write_config("[api\nbase_url = ");
        let err = load_config(temp_file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_env_overrides_win_over_file_values() {
        let env: HashMap<&str, &str> = HashMap::from([
            (ENV_API_BASE_URL, " http://localhost:4000 "),
            (ENV_API_TOKEN, "env-token"),
            (ENV_API_TIMEOUT_SECS, "12"),
        ]);
        let mut config = AppConfig::default();

        apply_env_overrides(&mut config, |key| env.get(key).map(|v| v.to_string())).unwrap();

        assert_eq!(config.api.base_url, "http://localhost:4000");
        assert_eq!(config.api.auth_token.as_deref(), Some("env-token"));
        assert_eq!(config.api.timeout_secs, 12);
    }

    #[test]
    fn test_blank_env_values_are_ignored() {
        let mut config = AppConfig::default();
        apply_env_overrides(&mut config, |_| Some("  ".to_string())).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_invalid_timeout_override_is_an_error() {
        let mut config = AppConfig::default();
        let err = apply_env_overrides(&mut config, |key| {
            (key == ENV_API_TIMEOUT_SECS).then(|| "soon".to_string())
        })
        .unwrap_err();
        assert!(err.to_string().contains(ENV_API_TIMEOUT_SECS));
    }

    #[test]
    #[serial]
    fn test_resolve_config_reads_process_env() {
        let temp_file = write_config("[api]\nbase_url = \"https://file.example.com\"\n");
        std::env::set_var(ENV_API_BASE_URL, "https://env.example.com");
        std::env::remove_var(ENV_API_TOKEN);
        std::env::remove_var(ENV_API_TIMEOUT_SECS);

        let config = resolve_config(Some(temp_file.path().to_path_buf()));
        std::env::remove_var(ENV_API_BASE_URL);

        assert_eq!(config.unwrap().api.base_url, "https://env.example.com");
    }

    #[test]
    #[serial]
    fn test_resolve_config_requires_explicit_file_to_exist() {
        let result = resolve_config(Some(PathBuf::from("/does/not/exist.toml")));
        assert!(result.is_err());
    }
}
