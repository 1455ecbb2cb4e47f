pub mod fetch_utils;
pub mod http_client;
pub mod pagination;
pub mod urls;
mod core;

// Re-export URL utilities
pub use urls::*;
// Re-export HTTP client utilities
pub use http_client::create_http_client_with_timeout;
// Re-export fetch primitives
pub use fetch_utils::fetch;
pub use pagination::fetch_items;
// Re-export core API functions
pub use self::core::*;
