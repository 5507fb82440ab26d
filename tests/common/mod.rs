//! Shared test fixtures: a canned-payload fantasy source and payload
//! builders in the upstream wire shape.

use std::collections::{HashMap, HashSet};

use serde_json::{json, Value};

use puckboard::error::{PuckboardError, Result};
use puckboard::yahoo::FantasySource;
use puckboard::Week;

/// In-memory stand-in for the Yahoo API.
#[derive(Default)]
pub struct FakeSource {
    pub standings: Value,
    pub current_scoreboard: Value,
    pub weekly_scoreboards: HashMap<u16, Value>,
    pub fail_weeks: HashSet<u16>,
    /// `(team_id, week)` → roster payload; absent entries fail the fetch.
    pub rosters: HashMap<(String, u16), Value>,
}

impl FantasySource for FakeSource {
    async fn standings(&self) -> Result<Value> {
        Ok(self.standings.clone())
    }

    async fn scoreboard(&self, week: Option<Week>) -> Result<Value> {
        let Some(week) = week else {
            return Ok(self.current_scoreboard.clone());
        };
        if self.fail_weeks.contains(&week.as_u16()) {
            return Err(PuckboardError::NoData);
        }
        self.weekly_scoreboards
            .get(&week.as_u16())
            .cloned()
            .ok_or(PuckboardError::NoData)
    }

    async fn settings(&self) -> Result<Value> {
        Err(PuckboardError::NoData)
    }

    async fn team_meta(&self, _team_id: &str) -> Result<Value> {
        Err(PuckboardError::NoData)
    }

    async fn team_roster(&self, _team_id: &str) -> Result<Value> {
        Err(PuckboardError::NoData)
    }

    async fn roster_players(&self, team_id: &str, week: Option<Week>) -> Result<Value> {
        let week = week.map(|w| w.as_u16()).unwrap_or(0);
        self.rosters
            .get(&(team_id.to_string(), week))
            .cloned()
            .ok_or(PuckboardError::NoData)
    }
}

pub fn standings_payload(teams: &[(&str, &str)]) -> Value {
    let rows: Vec<Value> = teams
        .iter()
        .enumerate()
        .map(|(i, (key, name))| {
            json!({"team_key": key, "team_id": (i + 1).to_string(), "name": name})
        })
        .collect();
    json!({ "standings": rows })
}

pub fn scoreboard_payload(week: u16, matchups: Vec<Value>) -> Value {
    json!({ "scoreboard": { "week": week, "matchups": matchups } })
}

/// A finished head-to-head matchup with the given category-win tallies.
pub fn h2h_matchup(team_a: &str, team_b: &str, a_wins: u32, b_wins: u32, ties: u32) -> Value {
    let mut winners = Vec::new();
    let mut stat_id = 0u32;
    for _ in 0..a_wins {
        stat_id += 1;
        winners.push(json!({"stat_winner": {"stat_id": stat_id.to_string(), "winner_team_key": team_a}}));
    }
    for _ in 0..b_wins {
        stat_id += 1;
        winners.push(json!({"stat_winner": {"stat_id": stat_id.to_string(), "winner_team_key": team_b}}));
    }
    for _ in 0..ties {
        stat_id += 1;
        winners.push(json!({"stat_winner": {"stat_id": stat_id.to_string(), "is_tied": "1"}}));
    }
    json!({
        "matchup": {
            "status": "postevent",
            "teams": [
                {"team": {"team_key": team_a, "name": team_a}},
                {"team": {"team_key": team_b, "name": team_b}}
            ],
            "stat_winners": winners
        }
    })
}

/// A matchup team carrying weekly category stat values.
pub fn team_with_stats(team_key: &str, name: &str, stats: &[(&str, &str)]) -> Value {
    let entries: Vec<Value> = stats
        .iter()
        .map(|(id, value)| json!({"stat": {"stat_id": id, "value": value}}))
        .collect();
    json!({
        "team": {
            "team_key": team_key,
            "name": name,
            "team_stats": {"stats": entries}
        }
    })
}

pub fn stats_matchup(teams: Vec<Value>) -> Value {
    json!({"matchup": {"status": "postevent", "teams": teams}})
}

/// A roster payload of `(player_key, stats)` entries.
pub fn roster_payload(players: &[(&str, &[(&str, &str)])]) -> Value {
    let entries: Vec<Value> = players
        .iter()
        .map(|(player_key, stats)| {
            let stat_entries: Vec<Value> = stats
                .iter()
                .map(|(id, value)| json!({"stat": {"stat_id": id, "value": value}}))
                .collect();
            json!({
                "player": {
                    "player_key": player_key,
                    "name": {"full": player_key},
                    "player_stats": {"stats": stat_entries}
                }
            })
        })
        .collect();
    json!({"roster": {"players": entries}})
}
