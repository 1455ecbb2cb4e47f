use crate::constants::roster::BYE_SENTINEL;

/// Tournament fields broadcast to every report row, already rendered as text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TournamentMetadata {
    pub name: String,
    pub start: String,
    pub region: String,
    pub prize_pool: String,
}

/// Winner and loser player names for one match, each side capped at the
/// number of fixed report columns
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchRecord {
    pub match_id: Option<String>,
    pub winners: Vec<String>,
    pub losers: Vec<String>,
}

impl MatchRecord {
    /// Whether this record came from a bye rather than a played match
    pub fn is_bye(&self) -> bool {
        self.losers.len() == 1 && self.losers[0] == BYE_SENTINEL
    }
}
