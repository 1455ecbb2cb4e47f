pub mod flatten;
pub mod metadata;

pub use flatten::{FlattenError, FlattenOutcome, flatten_match, flatten_match_value, flatten_matches, is_bye};
pub use metadata::{format_start_time, tournament_metadata, tournament_metadata_in};
