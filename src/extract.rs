//! Shape-tolerant extraction over raw Yahoo Fantasy payloads.
//!
//! The upstream wrapper does not return one stable schema: repeated elements
//! arrive as arrays or keyed objects, field names switch between snake and
//! camel case, and sub-objects (`scoreboard`, `standings`) appear at varying
//! depths depending on the call. Every normalizer is built from the helpers
//! here. Each lookup is an ordered slice of candidate accessors tried
//! first-match-wins so the fallback order stays auditable; changing the
//! order changes behavior against live data.

use crate::cli::types::Week;
use crate::models::{StatValue, TeamInfo};
use serde_json::Value;

type Accessor = for<'a> fn(&'a Value) -> Option<&'a Value>;
type ListAccessor = for<'a> fn(&'a Value) -> Option<Vec<&'a Value>>;

fn first_match<'a>(raw: &'a Value, candidates: &[Accessor]) -> Option<&'a Value> {
    candidates.iter().find_map(|access| access(raw))
}

fn first_list<'a>(raw: &'a Value, candidates: &[ListAccessor]) -> Option<Vec<&'a Value>> {
    candidates.iter().find_map(|access| access(raw))
}

/// Repeated-element helper: Yahoo encodes lists either as arrays or as
/// keyed objects (`{"0": {...}, "1": {...}, "count": 2}`).
pub fn object_list(v: &Value) -> Vec<&Value> {
    match v {
        Value::Array(items) => items.iter().collect(),
        Value::Object(map) => map.values().filter(|v| v.is_object()).collect(),
        _ => Vec::new(),
    }
}

fn array_items(v: &Value) -> Vec<&Value> {
    v.as_array().map(|a| a.iter().collect()).unwrap_or_default()
}

/// Non-empty string coercion: strings pass through, numbers are formatted.
fn coerce_string(v: &Value) -> Option<String> {
    match v {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// First non-empty string among alternate field spellings.
pub fn string_field(v: &Value, names: &[&str]) -> Option<String> {
    names.iter().find_map(|n| v.get(n).and_then(coerce_string))
}

/// String form of a value, `""` for missing/null (unlike `string_field`,
/// an explicit empty string is preserved).
fn value_string(v: Option<&Value>) -> String {
    match v {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Truthy flag in any of Yahoo's encodings: `"1"`, `1`, or `true`.
pub fn flag_field(v: &Value, names: &[&str]) -> bool {
    names.iter().any(|n| match v.get(n) {
        Some(Value::String(s)) => s == "1",
        Some(Value::Number(n)) => n.as_u64() == Some(1),
        Some(Value::Bool(b)) => *b,
        _ => false,
    })
}

// Scoreboard locator candidates, in priority order.
fn scoreboard_direct(v: &Value) -> Option<&Value> {
    v.get("scoreboard")
}
fn scoreboard_in_league(v: &Value) -> Option<&Value> {
    v.get("league")?.get("scoreboard")
}
fn scoreboard_in_fantasy_content(v: &Value) -> Option<&Value> {
    v.get("fantasy_content")?.get("league")?.get("scoreboard")
}

/// Locate the scoreboard-shaped sub-object, falling back to the value
/// itself when no wrapper matches.
pub fn locate_scoreboard(raw: &Value) -> &Value {
    const CANDIDATES: &[Accessor] = &[
        scoreboard_direct,
        scoreboard_in_league,
        scoreboard_in_fantasy_content,
    ];
    first_match(raw, CANDIDATES).unwrap_or(raw)
}

fn week_number(v: &Value) -> Option<u16> {
    match v.get("week") {
        Some(Value::Number(n)) => n.as_u64().map(|n| n as u16),
        Some(Value::String(s)) => s.parse().ok(),
        _ => None,
    }
}

/// Current week from a scoreboard-shaped payload; 0 is the sentinel for
/// "no active week / season not started".
pub fn extract_current_week(raw: &Value) -> Week {
    let scoreboard = locate_scoreboard(raw);
    Week::new(
        week_number(scoreboard)
            .or_else(|| week_number(raw))
            .unwrap_or(0),
    )
}

// Team-list candidates. A present-but-malformed `standings` key wins the
// chain and yields an empty list; it does not fall through.
fn teams_from_array(v: &Value) -> Option<Vec<&Value>> {
    v.as_array().map(|a| a.iter().collect())
}
fn teams_from_standings(v: &Value) -> Option<Vec<&Value>> {
    v.get("standings").map(array_items)
}
fn teams_from_league_standings(v: &Value) -> Option<Vec<&Value>> {
    v.get("league")?.get("standings").map(array_items)
}

/// Raw per-team objects from a standings-shaped payload.
pub fn team_list(raw: &Value) -> Vec<&Value> {
    const CANDIDATES: &[ListAccessor] = &[
        teams_from_array,
        teams_from_standings,
        teams_from_league_standings,
    ];
    first_list(raw, CANDIDATES).unwrap_or_default()
}

/// Team identities from a standings-shaped payload.
pub fn extract_teams(raw: &Value) -> Vec<TeamInfo> {
    team_list(raw)
        .into_iter()
        .map(|t| TeamInfo {
            team_key: string_field(t, &["team_key", "teamKey"]).unwrap_or_default(),
            team_id: string_field(t, &["team_id", "teamId"]).unwrap_or_default(),
            name: string_field(t, &["name"]).unwrap_or_else(|| "Unknown Team".to_string()),
        })
        .collect()
}

// Stats-collection candidates: team payloads nest under `team_stats`,
// player payloads under `player_stats`, some shapes are flat.
fn stats_in_team_stats(v: &Value) -> Option<Vec<&Value>> {
    v.get("team_stats")?.get("stats").map(array_items)
}
fn stats_in_player_stats(v: &Value) -> Option<Vec<&Value>> {
    v.get("player_stats")?.get("stats").map(array_items)
}
fn stats_direct(v: &Value) -> Option<Vec<&Value>> {
    v.get("stats").map(array_items)
}

/// `{statId, value}` pairs from a team- or player-shaped payload, both
/// sides coerced to strings. Entries may be wrapped in `{stat: {...}}`.
pub fn extract_stats(raw: &Value) -> Vec<StatValue> {
    const CANDIDATES: &[ListAccessor] =
        &[stats_in_team_stats, stats_in_player_stats, stats_direct];
    first_list(raw, CANDIDATES)
        .unwrap_or_default()
        .into_iter()
        .map(|entry| {
            let stat = entry.get("stat").unwrap_or(entry);
            StatValue {
                stat_id: string_field(stat, &["stat_id", "statId"]).unwrap_or_default(),
                value: value_string(stat.get("value")),
            }
        })
        .collect()
}

/// Raw matchup objects from a scoreboard payload, unwrapped from their
/// optional `{matchup: {...}}` envelope.
pub fn extract_matchups(raw: &Value) -> Vec<&Value> {
    let scoreboard = locate_scoreboard(raw);
    match scoreboard.get("matchups") {
        Some(m) => object_list(m)
            .into_iter()
            .map(|entry| entry.get("matchup").unwrap_or(entry))
            .collect(),
        None => Vec::new(),
    }
}

/// Raw team objects of one matchup (`teams` or `matchup_teams`, entries
/// unwrapped from `{team: {...}}`).
pub fn matchup_team_list(matchup: &Value) -> Vec<&Value> {
    let raw_teams = matchup
        .get("teams")
        .or_else(|| matchup.get("matchup_teams"));
    match raw_teams {
        Some(t) => object_list(t)
            .into_iter()
            .map(|entry| entry.get("team").unwrap_or(entry))
            .collect(),
        None => Vec::new(),
    }
}

// Roster-player candidates, shared by the roster and leaderboard views.
fn players_from_array(v: &Value) -> Option<Vec<&Value>> {
    v.as_array().map(|a| a.iter().collect())
}
fn players_in_roster_players(v: &Value) -> Option<Vec<&Value>> {
    v.get("roster")?.get("players").map(object_list)
}
fn players_in_roster(v: &Value) -> Option<Vec<&Value>> {
    v.get("roster").map(array_items)
}
fn players_direct(v: &Value) -> Option<Vec<&Value>> {
    v.get("players").map(object_list)
}

/// Raw player objects from a roster-shaped payload, unwrapped from their
/// optional `{player: {...}}` envelope.
pub fn roster_player_list(raw: &Value) -> Vec<&Value> {
    const CANDIDATES: &[ListAccessor] = &[
        players_from_array,
        players_in_roster_players,
        players_in_roster,
        players_direct,
    ];
    first_list(raw, CANDIDATES)
        .unwrap_or_default()
        .into_iter()
        .map(|entry| entry.get("player").unwrap_or(entry))
        .collect()
}

/// First team logo URL (`team_logos[0].team_logo.url` or `[0].url`).
pub fn extract_logo_url(team: &Value) -> Option<String> {
    let logos = team.get("team_logos").or_else(|| team.get("teamLogos"))?;
    let first = logos.as_array()?.first()?;
    first
        .get("team_logo")
        .and_then(|l| l.get("url"))
        .or_else(|| first.get("url"))
        .and_then(coerce_string)
}

/// First manager's display name (nickname preferred).
pub fn extract_manager_name(team: &Value) -> String {
    let managers = match team.get("managers") {
        Some(m) => m,
        None => return String::new(),
    };
    let first = match managers {
        Value::Array(items) => match items.first() {
            Some(entry) => entry.get("manager").unwrap_or(entry),
            None => return String::new(),
        },
        other => other,
    };
    string_field(first, &["nickname", "name"]).unwrap_or_default()
}
