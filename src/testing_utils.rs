use serde_json::{Value, json};

/// Test utilities for building FACEIT-shaped JSON payloads
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Creates a roster with players named `{prefix}1..{prefix}{count}`
    pub fn roster(prefix: &str, count: usize) -> Value {
        Value::Array(
            (1..=count)
                .map(|i| {
                    json!({
                        "player_id": format!("{prefix}-id-{i}"),
                        "nickname": format!("{prefix}_nick{i}"),
                        "game_player_name": format!("{prefix}{i}")
                    })
                })
                .collect(),
        )
    }

    /// Creates a finished match where `winner` (`"faction1"` or `"faction2"`)
    /// won. Winner players are named `w1..`, loser players `l1..`.
    pub fn finished_match(match_id: &str, winner: &str, winners: usize, losers: usize) -> Value {
        let (faction1, faction2) = if winner == "faction1" {
            (Self::roster("w", winners), Self::roster("l", losers))
        } else {
            (Self::roster("l", losers), Self::roster("w", winners))
        };

        json!({
            "match_id": match_id,
            "status": "FINISHED",
            "round": 1,
            "teams": {
                "faction1": {"faction_id": "team-a", "name": "Team A", "roster": faction1},
                "faction2": {"faction_id": "team-b", "name": "Team B", "roster": faction2}
            },
            "results": {"winner": winner, "score": {"faction1": 1, "faction2": 0}}
        })
    }

    /// Creates a bye match: `faction1` advances, `faction2` is the placeholder
    pub fn bye_match(match_id: &str, players: usize) -> Value {
        json!({
            "match_id": match_id,
            "status": "FINISHED",
            "round": 1,
            "teams": {
                "faction1": {"faction_id": "team-a", "name": "Team A", "roster": Self::roster("w", players)},
                "faction2": {"faction_id": "bye", "name": "bye"}
            }
        })
    }

    /// Creates a match that has not been decided and is not a bye
    pub fn undecided_match(match_id: &str) -> Value {
        json!({
            "match_id": match_id,
            "status": "SCHEDULED",
            "teams": {
                "faction1": {"faction_id": "team-a", "roster": Self::roster("a", 5)},
                "faction2": {"faction_id": "team-b", "roster": Self::roster("b", 5)}
            }
        })
    }

    /// Creates a championship details payload
    pub fn championship(name: &str, start_millis: i64, region: &str, prizes: Value) -> Value {
        json!({
            "championship_id": "champ-1",
            "name": name,
            "championship_start": start_millis,
            "region": region,
            "total_prizes": prizes,
            "game_id": "cs2",
            "status": "finished"
        })
    }

    /// Creates `count` placeholder items tagged with their position
    pub fn numbered_items(count: usize) -> Vec<Value> {
        (0..count).map(|i| json!({ "match_id": format!("m{i}") })).collect()
    }

    /// Wraps items in the list envelope used by paginated endpoints
    pub fn items_page(items: &[Value]) -> Value {
        json!({ "items": items, "start": 0, "end": items.len() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finished_match_places_winner_roster() {
        let m = TestDataBuilder::finished_match("m1", "faction2", 2, 3);
        assert_eq!(m["teams"]["faction2"]["roster"][1]["game_player_name"], "w2");
        assert_eq!(m["teams"]["faction1"]["roster"][2]["game_player_name"], "l3");
    }

    #[test]
    fn test_numbered_items_order() {
        let items = TestDataBuilder::numbered_items(3);
        assert_eq!(items[2]["match_id"], "m2");
    }
}
