use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Championship details as returned by `GET championships/{id}`.
///
/// Only the fields the report needs are required; a response missing any of
/// them is an unexpected structure and aborts the export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Championship {
    pub name: String,
    /// Start time as epoch milliseconds
    pub championship_start: i64,
    pub region: String,
    /// Kept as a JSON number so the report prints it exactly as received
    pub total_prizes: Number,
}
