//! League standings normalization.

use crate::extract::{extract_logo_url, extract_manager_name, string_field, team_list};
use crate::models::{StreakType, TeamStanding};
use serde_json::Value;

fn u32_field(v: &Value, names: &[&str]) -> u32 {
    names
        .iter()
        .find_map(|n| match v.get(n) {
            Some(Value::Number(n)) => n.as_u64().map(|n| n as u32),
            Some(Value::String(s)) => s.parse().ok(),
            _ => None,
        })
        .unwrap_or(0)
}

fn f64_field(v: &Value, names: &[&str]) -> f64 {
    names
        .iter()
        .find_map(|n| match v.get(n) {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.parse().ok(),
            _ => None,
        })
        .unwrap_or(0.0)
}

/// Flatten a standings payload into table rows. Rank values arrive dense
/// (1..N) from upstream and are carried through as-is.
pub fn normalize(raw: &Value) -> Vec<TeamStanding> {
    team_list(raw).into_iter().map(normalize_team).collect()
}

fn normalize_team(team: &Value) -> TeamStanding {
    // Yahoo uses "standings" (not "team_standings") as the per-team key,
    // but older wrapper versions emit the latter.
    let null = Value::Null;
    let standings = team
        .get("standings")
        .or_else(|| team.get("team_standings"))
        .or_else(|| team.get("teamStandings"))
        .unwrap_or(&null);
    let outcomes = standings
        .get("outcome_totals")
        .or_else(|| standings.get("outcomeTotals"))
        .unwrap_or(&null);
    let streak = standings.get("streak").unwrap_or(&null);

    let streak_type = match streak.get("type").and_then(Value::as_str) {
        Some("win") => StreakType::Win,
        Some("loss") => StreakType::Loss,
        _ => StreakType::Tie,
    };

    TeamStanding {
        team_key: string_field(team, &["team_key", "teamKey"]).unwrap_or_default(),
        team_id: string_field(team, &["team_id", "teamId"]).unwrap_or_default(),
        name: string_field(team, &["name"]).unwrap_or_else(|| "Unknown Team".to_string()),
        manager_name: extract_manager_name(team),
        logo_url: extract_logo_url(team),
        rank: u32_field(standings, &["rank"]),
        playoff_seed: u32_field(standings, &["playoff_seed", "playoffSeed"]),
        wins: u32_field(outcomes, &["wins"]),
        losses: u32_field(outcomes, &["losses"]),
        ties: u32_field(outcomes, &["ties"]),
        percentage: string_field(outcomes, &["percentage"])
            .unwrap_or_else(|| ".000".to_string()),
        points_for: f64_field(standings, &["points_for", "pointsFor"]),
        points_against: f64_field(standings, &["points_against", "pointsAgainst"]),
        games_back: string_field(standings, &["games_back", "gamesBack"])
            .unwrap_or_else(|| "-".to_string()),
        streak_type,
        streak_value: u32_field(streak, &["value"]),
    }
}
