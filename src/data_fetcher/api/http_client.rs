//! HTTP client creation and configuration utilities

use crate::error::AppError;
use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use std::time::Duration;

/// Creates an HTTP client that sends the bearer token on every request.
///
/// # Arguments
/// * `api_key` - FACEIT Data API key
/// * `timeout_seconds` - Per-request timeout
///
/// # Returns
/// * `Result<Client, AppError>` - A configured reqwest HTTP client or error
///
/// # Notes
/// * The authorization header is marked sensitive so reqwest never prints it
/// * No retry layer; the caller sees the first failure
pub fn create_http_client_with_timeout(
    api_key: &str,
    timeout_seconds: u64,
) -> Result<Client, AppError> {
    let mut auth = HeaderValue::from_str(&format!("Bearer {api_key}"))
        .map_err(|e| AppError::config_error(format!("API key is not a valid header value: {e}")))?;
    auth.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, auth);
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let client = Client::builder()
        .default_headers(headers)
        .timeout(Duration::from_secs(timeout_seconds))
        .pool_max_idle_per_host(crate::constants::HTTP_POOL_MAX_IDLE_PER_HOST)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()?;

    Ok(client)
}

/// Creates an HTTP client for testing with a fixed token and default timeout
#[cfg(test)]
pub fn create_test_http_client() -> Client {
    create_http_client_with_timeout("test-key", crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS)
        .expect("Failed to create test HTTP client")
}
