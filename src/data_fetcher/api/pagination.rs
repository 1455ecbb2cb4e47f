//! Offset/limit pagination over list endpoints

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument};

use super::fetch_utils::fetch;
use super::urls::build_page_url;
use crate::data_fetcher::models::ItemsPage;
use crate::error::AppError;

/// Fetches a list endpoint, optionally following offset pagination.
///
/// With `repeat` unset a single request is made (with `?limit=` when a limit
/// is given) and the response is returned as is.
///
/// With `repeat` set, page 0 is fetched with `?limit=L`. While the most
/// recently fetched page holds a non-zero multiple of `L` items, the next page
/// is requested at `offset = page_index * L`. An empty page or a short page
/// ends the loop. The returned envelope keeps the first page's `start`/`end`
/// and the union of all items in the order they were received.
///
/// # Errors
/// * `AppError::InvalidArgument` - `repeat` with a missing or zero limit, or a
///   zero limit in single mode. No request is made.
/// * Any fetch error from the first failing page. Earlier pages are discarded.
#[instrument(skip(client))]
pub async fn fetch_items<T: DeserializeOwned>(
    client: &Client,
    endpoint: &str,
    limit: Option<usize>,
    repeat: bool,
) -> Result<ItemsPage<T>, AppError> {
    if limit == Some(0) {
        return Err(AppError::invalid_argument("page size limit must be greater than zero"));
    }

    if !repeat {
        let url = match limit {
            Some(limit) => build_page_url(endpoint, None, limit),
            None => endpoint.to_string(),
        };
        return fetch(client, &url).await;
    }

    let limit = limit.ok_or_else(|| {
        AppError::invalid_argument("repeated pagination requires a page size limit")
    })?;

    let mut response: ItemsPage<T> = fetch(client, &build_page_url(endpoint, None, limit)).await?;
    let mut last_page_len = response.len();
    let mut page_index = 1usize;
    debug!("Page 0 returned {last_page_len} items");

    while last_page_len != 0 && last_page_len % limit == 0 {
        let offset = page_index * limit;
        let page: ItemsPage<T> =
            fetch(client, &build_page_url(endpoint, Some(offset), limit)).await?;

        if page.is_empty() {
            debug!("Page {page_index} at offset {offset} is empty, stopping");
            break;
        }

        last_page_len = page.len();
        debug!("Page {page_index} at offset {offset} returned {last_page_len} items");
        response.items.extend(page.items);
        page_index += 1;
    }

    info!(
        "Fetched {} items across {} page(s) from {}",
        response.len(),
        page_index,
        endpoint
    );
    Ok(response)
}
