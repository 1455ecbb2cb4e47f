use crate::constants::env_vars;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tokio::fs;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
///
/// Values come from an optional TOML file and are then overridden by the
/// environment (including a `.env` file loaded at startup).
#[derive(Serialize, Deserialize, Clone)]
pub struct Config {
    /// Base URL of the FACEIT Data API. Always normalized to end with a slash.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Bearer token sent with every request.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub api_key: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests. Defaults to 30 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
}

fn default_api_base_url() -> String {
    crate::constants::DEFAULT_API_BASE_URL.to_string()
}

/// Default HTTP timeout in seconds
fn default_http_timeout() -> u64 {
    crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: default_api_base_url(),
            api_key: String::new(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
        }
    }
}

// The API key never ends up in logs or panic messages.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_base_url", &self.api_base_url)
            .field("api_key", &if self.api_key.is_empty() { "<unset>" } else { "<redacted>" })
            .field("log_file_path", &self.log_file_path)
            .field("http_timeout_seconds", &self.http_timeout_seconds)
            .finish()
    }
}

impl Config {
    /// Loads configuration from the default config file location, applying
    /// environment overrides and validating the result.
    ///
    /// # Environment Variables
    /// - `FACEIT_API_KEY` (or `API_KEY`) - Bearer token, required
    /// - `FACEIT_API_BASE_URL` - Override API base URL
    /// - `FACEIT_LOG_FILE` - Override log file path
    /// - `FACEIT_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded configuration
    /// * `Err(AppError)` - Config file unreadable or validation failed
    pub async fn load() -> Result<Self, AppError> {
        Self::load_with_path(&get_config_path()).await
    }

    /// Same as [`Config::load`] but reads the config file from `path`.
    /// A missing file is not an error; defaults are used instead.
    pub async fn load_with_path(path: &str) -> Result<Self, AppError> {
        let mut config = if Path::new(path).exists() {
            Self::load_from_path(path).await?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.api_base_url = normalize_base_url(&config.api_base_url);
        config.validate()?;

        Ok(config)
    }

    /// Loads configuration from a file path without consulting the environment.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Overrides file values with any environment variables that are set.
    /// `FACEIT_API_KEY` wins over the legacy `API_KEY`.
    pub fn apply_env_overrides(&mut self) {
        if let Some(api_key) = std::env::var(env_vars::API_KEY)
            .ok()
            .or_else(|| std::env::var(env_vars::LEGACY_API_KEY).ok())
            .filter(|key| !key.trim().is_empty())
        {
            self.api_key = api_key.trim().to_string();
        }

        if let Ok(api_base_url) = std::env::var(env_vars::API_BASE_URL) {
            self.api_base_url = api_base_url;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            &self.api_base_url,
            &self.api_key,
            self.http_timeout_seconds,
            &self.log_file_path,
        )
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        get_log_dir_path()
    }
}

/// Ensures the base URL ends with exactly one slash so relative endpoint
/// paths can be appended directly.
pub fn normalize_base_url(base_url: &str) -> String {
    format!("{}/", base_url.trim().trim_end_matches('/'))
}
