use serde::{Deserialize, Serialize};

/// Envelope the FACEIT Data API wraps around list endpoints.
///
/// After a paginated fetch, `items` holds the union of every page while
/// `start`/`end` still describe the first page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemsPage<T> {
    pub items: Vec<T>,
    #[serde(default)]
    pub start: Option<i64>,
    #[serde(default)]
    pub end: Option<i64>,
}

impl<T> ItemsPage<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
