use reqwest::Client;
use serde_json::Value;
use tracing::{info, instrument};

use super::fetch_utils::fetch;
use super::pagination::fetch_items;
use super::urls::{build_championship_url, build_matches_url};
use crate::config::Config;
use crate::data_fetcher::models::Championship;
use crate::error::AppError;

/// Rejects identifiers that would change the shape of the request URL.
pub fn validate_championship_id(championship_id: &str) -> Result<(), AppError> {
    let trimmed = championship_id.trim();
    if trimmed.is_empty() {
        return Err(AppError::invalid_argument("tournament id cannot be empty"));
    }
    if trimmed
        .chars()
        .any(|c| matches!(c, '/' | '?' | '#' | '&') || c.is_whitespace())
    {
        return Err(AppError::invalid_argument(format!(
            "tournament id '{championship_id}' contains characters not allowed in a URL path"
        )));
    }
    Ok(())
}

/// Fetches championship details with a single request.
///
/// The id is expected to have passed [`validate_championship_id`].
#[instrument(skip(client, config))]
pub async fn fetch_championship(
    client: &Client,
    config: &Config,
    championship_id: &str,
) -> Result<Championship, AppError> {
    let url = build_championship_url(&config.api_base_url, championship_id);
    let championship: Championship = fetch(client, &url).await?;
    info!(
        "Championship '{}' ({}) loaded",
        championship.name, championship.region
    );
    Ok(championship)
}

/// Fetches every match of a championship, following pagination.
///
/// Matches are returned as raw JSON so a single malformed entry cannot fail
/// the whole list; decoding happens per match in the flattener.
#[instrument(skip(client, config))]
pub async fn fetch_match_items(
    client: &Client,
    config: &Config,
    championship_id: &str,
    page_size: usize,
) -> Result<Vec<Value>, AppError> {
    let url = build_matches_url(&config.api_base_url, championship_id);
    let page = fetch_items::<Value>(client, &url, Some(page_size), true).await?;
    Ok(page.items)
}
