pub mod api;
pub mod models;
pub mod processors;

pub use api::{fetch_championship, fetch_items, fetch_match_items};
pub use models::{Championship, Match, MatchRecord, TournamentMetadata};
pub use processors::{flatten_matches, tournament_metadata};
