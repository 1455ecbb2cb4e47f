//! Application-wide constants and configuration values
//!
//! This module centralizes magic numbers, API paths and environment variable
//! names so the fetch and report code never hardcodes them.

/// Default FACEIT Data API base URL. Always ends with a slash.
pub const DEFAULT_API_BASE_URL: &str = "https://open.faceit.com/data/v4/";

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of idle connections per host in the HTTP client pool.
/// Requests are sequential, so a single connection is all we ever reuse.
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 1;

/// Page size used when fetching the match list
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Name of the log file written by the rolling appender
pub const LOG_FILE_NAME: &str = "faceit_export.log";

/// Environment variable names
pub mod env_vars {
    /// Bearer token for the FACEIT Data API
    pub const API_KEY: &str = "FACEIT_API_KEY";

    /// Older name for the bearer token, still honoured
    pub const LEGACY_API_KEY: &str = "API_KEY";

    /// Override for the API base URL
    pub const API_BASE_URL: &str = "FACEIT_API_BASE_URL";

    /// Override for the HTTP timeout in seconds
    pub const HTTP_TIMEOUT: &str = "FACEIT_HTTP_TIMEOUT";

    /// Override for the log file path
    pub const LOG_FILE: &str = "FACEIT_LOG_FILE";
}

/// Match flattening constants
pub mod roster {
    /// Number of fixed player columns per side (`w1..w9`, `l1..l9`)
    pub const MAX_SLOTS: usize = 9;

    /// Team identifier the platform uses for a scheduling placeholder
    pub const BYE_FACTION_ID: &str = "bye";

    /// Value written into `l1` for a bye match
    pub const BYE_SENTINEL: &str = "BYE";

    /// Key of the first team in a match's `teams` object
    pub const FACTION_ONE: &str = "faction1";

    /// Key of the second team in a match's `teams` object
    pub const FACTION_TWO: &str = "faction2";
}

/// CSV report column names
pub mod columns {
    /// Tournament metadata columns, repeated on every row
    pub const TOURNAMENT: [&str; 4] = [
        "tournament_name",
        "tournament_start",
        "tournament_region",
        "prize_pool",
    ];

    /// Prefix for winner roster columns
    pub const WINNER_PREFIX: &str = "w";

    /// Prefix for loser roster columns
    pub const LOSER_PREFIX: &str = "l";
}
