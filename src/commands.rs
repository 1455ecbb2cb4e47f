use reqwest::Client;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

use crate::config::Config;
use crate::data_fetcher::api::{
    create_http_client_with_timeout, fetch_championship, fetch_match_items,
    validate_championship_id,
};
use crate::data_fetcher::processors::{flatten_matches, tournament_metadata};
use crate::error::AppError;
use crate::report::{build_rows, write_report};

/// What an export produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub output_path: PathBuf,
    pub matches_fetched: usize,
    pub rows_written: usize,
    pub matches_skipped: usize,
}

/// Fetches a championship and its matches and writes the CSV report.
///
/// Everything is fetched before the file is touched, so any fetch failure
/// returns an error without creating or modifying `output_path`. Matches that
/// cannot be flattened are logged and left out of the report.
///
/// # Arguments
/// * `client` - HTTP client carrying the bearer token
/// * `config` - Loaded configuration (API base URL)
/// * `tournament_id` - Championship identifier
/// * `page_size` - Matches requested per page; must be greater than zero
/// * `output_path` - Destination CSV file
#[instrument(skip(client, config))]
pub async fn export_championship(
    client: &Client,
    config: &Config,
    tournament_id: &str,
    page_size: usize,
    output_path: &Path,
) -> Result<ExportSummary, AppError> {
    validate_championship_id(tournament_id)?;
    if page_size == 0 {
        return Err(AppError::invalid_argument("page size must be greater than zero"));
    }

    let championship = fetch_championship(client, config, tournament_id).await?;
    let match_items = fetch_match_items(client, config, tournament_id, page_size).await?;
    let matches_fetched = match_items.len();
    info!("Fetched {matches_fetched} matches for {tournament_id}");

    let metadata = tournament_metadata(&championship)?;
    let outcome = flatten_matches(match_items);
    if outcome.skipped > 0 {
        warn!(
            "{} of {} matches could not be flattened and were skipped",
            outcome.skipped, matches_fetched
        );
    }

    let rows = build_rows(&metadata, &outcome.records);
    write_report(output_path, &rows).await?;

    Ok(ExportSummary {
        output_path: output_path.to_path_buf(),
        matches_fetched,
        rows_written: rows.len(),
        matches_skipped: outcome.skipped,
    })
}

/// Builds the HTTP client from `config` and runs [`export_championship`].
pub async fn run_export(
    config: &Config,
    tournament_id: &str,
    page_size: usize,
    output_path: &Path,
) -> Result<ExportSummary, AppError> {
    let client = create_http_client_with_timeout(&config.api_key, config.http_timeout_seconds)?;
    export_championship(&client, config, tournament_id, page_size, output_path).await
}
