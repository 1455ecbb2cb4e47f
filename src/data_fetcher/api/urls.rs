//! URL building utilities for API endpoints

/// Builds the championship details URL.
///
/// # Arguments
/// * `api_base_url` - The API base URL, ending with a slash
/// * `championship_id` - The championship (tournament) identifier
///
/// # Example
/// ```
/// use faceit_export::data_fetcher::api::build_championship_url;
///
/// let url = build_championship_url("https://open.faceit.com/data/v4/", "abc-123");
/// assert_eq!(url, "https://open.faceit.com/data/v4/championships/abc-123");
/// ```
pub fn build_championship_url(api_base_url: &str, championship_id: &str) -> String {
    format!("{api_base_url}championships/{championship_id}")
}

/// Builds the championship match list URL, without paging parameters.
///
/// # Example
/// ```
/// use faceit_export::data_fetcher::api::build_matches_url;
///
/// let url = build_matches_url("https://open.faceit.com/data/v4/", "abc-123");
/// assert_eq!(url, "https://open.faceit.com/data/v4/championships/abc-123/matches");
/// ```
pub fn build_matches_url(api_base_url: &str, championship_id: &str) -> String {
    format!("{api_base_url}championships/{championship_id}/matches")
}

/// Appends paging parameters to an endpoint URL.
///
/// The first page carries only `limit`; later pages carry `offset` as well.
///
/// # Example
/// ```
/// use faceit_export::data_fetcher::api::build_page_url;
///
/// assert_eq!(build_page_url("https://x/m", None, 100), "https://x/m?limit=100");
/// assert_eq!(build_page_url("https://x/m", Some(200), 100), "https://x/m?offset=200&limit=100");
/// ```
pub fn build_page_url(endpoint: &str, offset: Option<usize>, limit: usize) -> String {
    let separator = if endpoint.contains('?') { '&' } else { '?' };
    match offset {
        Some(offset) => format!("{endpoint}{separator}offset={offset}&limit={limit}"),
        None => format!("{endpoint}{separator}limit={limit}"),
    }
}
