//! Turns raw match JSON into winner/loser name lists

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::constants::roster::{BYE_FACTION_ID, BYE_SENTINEL, FACTION_ONE, FACTION_TWO, MAX_SLOTS};
use crate::data_fetcher::models::{Faction, Match, MatchRecord};

/// Why a single match could not be flattened. Never escapes this module's
/// callers as a fatal error; the match is logged and skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlattenError {
    #[error("match could not be decoded: {0}")]
    Decode(String),

    #[error("match has no results.winner and is not a bye")]
    MissingWinner,

    #[error("winner '{0}' is not one of the match teams")]
    UnknownWinner(String),

    #[error("team '{0}' is missing")]
    MissingTeam(String),

    #[error("team '{0}' has no roster")]
    MissingRoster(String),

    #[error("player {index} on team '{team}' has no game_player_name")]
    MissingPlayerName { team: String, index: usize },
}

/// Result of flattening a whole match list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlattenOutcome {
    pub records: Vec<MatchRecord>,
    pub skipped: usize,
}

/// Whether the second team is the platform's bye placeholder
pub fn is_bye(m: &Match) -> bool {
    m.team(FACTION_TWO)
        .and_then(|team| team.faction_id.as_deref())
        .is_some_and(|id| id == BYE_FACTION_ID)
}

/// Opposing team key for a two-team match
fn opponent_of(team_key: &str) -> &'static str {
    if team_key == FACTION_ONE { FACTION_TWO } else { FACTION_ONE }
}

/// Player names of a team in roster order, capped at [`MAX_SLOTS`].
fn roster_names(m: &Match, team_key: &str) -> Result<Vec<String>, FlattenError> {
    let team: &Faction = m
        .team(team_key)
        .ok_or_else(|| FlattenError::MissingTeam(team_key.to_string()))?;
    let roster = team
        .roster
        .as_ref()
        .ok_or_else(|| FlattenError::MissingRoster(team_key.to_string()))?;

    roster
        .iter()
        .take(MAX_SLOTS)
        .enumerate()
        .map(|(index, player)| {
            player
                .game_player_name
                .clone()
                .ok_or_else(|| FlattenError::MissingPlayerName {
                    team: team_key.to_string(),
                    index,
                })
        })
        .collect()
}

/// Flattens a decoded match.
///
/// Dispatch is structural:
/// - a bye (second team id is `"bye"`) yields the first team's roster as
///   winners and a single `BYE` loser, whether or not a winner was recorded
/// - otherwise `results.winner` must name a team present in the match; the
///   other team is the loser
pub fn flatten_match(m: &Match) -> Result<MatchRecord, FlattenError> {
    if is_bye(m) {
        let winners = roster_names(m, FACTION_ONE)?;
        return Ok(MatchRecord {
            match_id: m.match_id.clone(),
            winners,
            losers: vec![BYE_SENTINEL.to_string()],
        });
    }

    let winner_key = m.winner_key().ok_or(FlattenError::MissingWinner)?;
    if winner_key != FACTION_ONE && winner_key != FACTION_TWO {
        return Err(FlattenError::UnknownWinner(winner_key.to_string()));
    }

    let winners = roster_names(m, winner_key)?;
    let losers = roster_names(m, opponent_of(winner_key))?;

    Ok(MatchRecord {
        match_id: m.match_id.clone(),
        winners,
        losers,
    })
}

/// Decodes and flattens a single raw match.
pub fn flatten_match_value(raw: Value) -> Result<MatchRecord, FlattenError> {
    let m: Match = serde_json::from_value(raw).map_err(|e| FlattenError::Decode(e.to_string()))?;
    flatten_match(&m)
}

/// Flattens every match in order. Matches that cannot be flattened are
/// logged with their id and the reason, then skipped.
pub fn flatten_matches(items: Vec<Value>) -> FlattenOutcome {
    let mut outcome = FlattenOutcome::default();

    for raw in items {
        let match_id = raw
            .get("match_id")
            .and_then(Value::as_str)
            .unwrap_or("<unknown>")
            .to_string();

        match flatten_match_value(raw) {
            Ok(record) => {
                debug!(
                    "Match {match_id}: {} winners, {} losers",
                    record.winners.len(),
                    record.losers.len()
                );
                outcome.records.push(record);
            }
            Err(e) => {
                warn!("Skipping match {match_id}: {e}");
                outcome.skipped += 1;
            }
        }
    }

    outcome
}
