use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One player entry in a team roster
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RosterPlayer {
    /// In-game name; this is what the report prints
    #[serde(default)]
    pub game_player_name: Option<String>,
}

/// One side of a match (`faction1` or `faction2`)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Faction {
    #[serde(default)]
    pub faction_id: Option<String>,
    #[serde(default)]
    pub roster: Option<Vec<RosterPlayer>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MatchResults {
    /// Team key of the winner, e.g. `"faction1"`
    #[serde(default)]
    pub winner: Option<String>,
}

/// A championship match, reduced to what the report reads. Every field is
/// optional so that byes and half-filled matches still decode; the flattener
/// decides what is usable. Other API fields are ignored whatever their type.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Match {
    #[serde(default)]
    pub match_id: Option<String>,
    #[serde(default)]
    pub teams: BTreeMap<String, Faction>,
    #[serde(default)]
    pub results: Option<MatchResults>,
}

impl Match {
    pub fn team(&self, key: &str) -> Option<&Faction> {
        self.teams.get(key)
    }

    /// Team key named in `results.winner`, if any
    pub fn winner_key(&self) -> Option<&str> {
        self.results.as_ref().and_then(|r| r.winner.as_deref())
    }
}
