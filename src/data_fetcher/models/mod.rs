pub mod championship;
pub mod common;
pub mod matches;
pub mod page;

pub use championship::Championship;
pub use common::{MatchRecord, TournamentMetadata};
pub use matches::{Faction, Match, MatchResults, RosterPlayer};
pub use page::ItemsPage;
