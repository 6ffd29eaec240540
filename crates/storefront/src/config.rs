//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `BACKEND_URL` - Base URL of the pizza API (default: `http://localhost:8000`)
//! - `BLAZE_DATA_DIR` - Directory holding the persisted cart
//!   (default: `<platform data dir>/blaze-pizza`)
//! - `BLAZE_HTTP_TIMEOUT_SECS` - Per-request timeout in seconds (default: 10)
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Default backend when `BACKEND_URL` is unset.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Directory name used under the platform data dir.
const APP_DIR_NAME: &str = "blaze-pizza";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Base URL of the pizza API
    pub backend_url: Url,
    /// Directory holding the persisted cart snapshot
    pub data_dir: PathBuf,
    /// Timeout applied to every backend request
    pub request_timeout: Duration,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let backend_url = parse_backend_url(&get_env_or_default("BACKEND_URL", DEFAULT_BACKEND_URL))?;
        let data_dir = get_optional_env("BLAZE_DATA_DIR").map_or_else(default_data_dir, PathBuf::from);
        let request_timeout = parse_timeout(&get_env_or_default(
            "BLAZE_HTTP_TIMEOUT_SECS",
            &DEFAULT_TIMEOUT_SECS.to_string(),
        ))?;
        let sentry_dsn = get_optional_env("SENTRY_DSN");

        Ok(Self {
            backend_url,
            data_dir,
            request_timeout,
            sentry_dsn,
        })
    }

    /// Configuration pointing at `backend_url` with every other setting at
    /// its default.
    #[must_use]
    pub fn for_backend(backend_url: Url, data_dir: PathBuf) -> Self {
        Self {
            backend_url,
            data_dir,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            sentry_dsn: None,
        }
    }

    /// Path of the persisted cart snapshot.
    #[must_use]
    pub fn cart_path(&self) -> PathBuf {
        self.data_dir.join(crate::store::CART_FILE_NAME)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable, treating blank values as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    get_optional_env(key).unwrap_or_else(|| default.to_string())
}

/// Parse the backend URL. Only `http` and `https` are accepted.
fn parse_backend_url(value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value.trim())
        .map_err(|e| ConfigError::InvalidEnvVar("BACKEND_URL".to_string(), e.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::InvalidEnvVar(
            "BACKEND_URL".to_string(),
            format!("unsupported scheme '{other}'"),
        )),
    }
}

/// Parse a timeout in whole seconds. Zero is rejected.
fn parse_timeout(value: &str) -> Result<Duration, ConfigError> {
    let secs = value.trim().parse::<u64>().map_err(|e| {
        ConfigError::InvalidEnvVar("BLAZE_HTTP_TIMEOUT_SECS".to_string(), e.to_string())
    })?;
    if secs == 0 {
        return Err(ConfigError::InvalidEnvVar(
            "BLAZE_HTTP_TIMEOUT_SECS".to_string(),
            "must be greater than zero".to_string(),
        ));
    }
    Ok(Duration::from_secs(secs))
}

/// Platform data directory, or a dot-directory in the working directory
/// when the platform has none.
fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(
        || PathBuf::from(format!(".{APP_DIR_NAME}")),
        |dir| dir.join(APP_DIR_NAME),
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_backend_url_default() {
        let url = parse_backend_url(DEFAULT_BACKEND_URL).unwrap();
        assert_eq!(url.host_str(), Some("localhost"));
        assert_eq!(url.port(), Some(8000));
    }

    #[test]
    fn test_parse_backend_url_rejects_garbage() {
        let err = parse_backend_url("not a url").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "BACKEND_URL"));
    }

    #[test]
    fn test_parse_backend_url_rejects_other_schemes() {
        assert!(parse_backend_url("ftp://pizza.example").is_err());
    }

    #[test]
    fn test_parse_timeout() {
        assert_eq!(parse_timeout("30").unwrap(), Duration::from_secs(30));
        assert!(parse_timeout("0").is_err());
        assert!(parse_timeout("soon").is_err());
    }

    #[test]
    fn test_default_data_dir_ends_with_app_name() {
        assert!(default_data_dir().ends_with("blaze-pizza") || default_data_dir().ends_with(".blaze-pizza"));
    }

    #[test]
    fn test_cart_path() {
        let config = StorefrontConfig::for_backend(
            Url::parse("http://localhost:8000").unwrap(),
            PathBuf::from("/tmp/blaze"),
        );
        assert_eq!(config.cart_path(), PathBuf::from("/tmp/blaze/cart.json"));
        assert_eq!(config.request_timeout, Duration::from_secs(10));
    }
}
