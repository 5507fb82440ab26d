//! Roster/player normalization.

use crate::extract::{extract_stats, roster_player_list, string_field};
use crate::models::PlayerInfo;
use serde_json::Value;

/// Flatten a roster-shaped payload into player rows.
pub fn normalize(raw: &Value) -> Vec<PlayerInfo> {
    roster_player_list(raw)
        .into_iter()
        .map(normalize_player)
        .collect()
}

fn full_name(player: &Value) -> String {
    let null = Value::Null;
    let name = player.get("name").unwrap_or(&null);
    string_field(name, &["full", "ascii_full"])
        .or_else(|| {
            let first = string_field(name, &["first"]).unwrap_or_default();
            let last = string_field(name, &["last"]).unwrap_or_default();
            let joined = format!("{} {}", first, last).trim().to_string();
            if joined.is_empty() {
                None
            } else {
                Some(joined)
            }
        })
        .unwrap_or_else(|| "Unknown".to_string())
}

fn eligible_positions(player: &Value) -> Vec<String> {
    let positions = player
        .get("eligible_positions")
        .or_else(|| player.get("eligiblePositions"))
        .and_then(Value::as_array);
    positions
        .map(|eps| {
            eps.iter()
                .filter_map(|ep| match ep {
                    // Entries come either as bare strings or `{position: "C"}`
                    Value::String(s) if !s.is_empty() => Some(s.clone()),
                    Value::Object(_) => string_field(ep, &["position"]),
                    _ => None,
                })
                .collect()
        })
        .unwrap_or_default()
}

fn selected_position(player: &Value, eligible: &[String]) -> String {
    let selected = player
        .get("selected_position")
        .or_else(|| player.get("selectedPosition"));
    match selected {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(obj @ Value::Object(_)) => string_field(obj, &["position"])
            .or_else(|| eligible.first().cloned())
            .unwrap_or_else(|| "BN".to_string()),
        _ => eligible
            .first()
            .cloned()
            .unwrap_or_else(|| "BN".to_string()),
    }
}

fn normalize_player(player: &Value) -> PlayerInfo {
    let eligible = eligible_positions(player);
    let selected = selected_position(player, &eligible);

    // Availability: an explicit status code wins; a bare injury note
    // surfaces as day-to-day; otherwise the player is healthy.
    let status = string_field(player, &["status"]).or_else(|| {
        string_field(player, &["injury_note"]).map(|_| "DTD".to_string())
    });

    let image_url = player
        .get("headshot")
        .and_then(|h| string_field(h, &["url"]))
        .or_else(|| string_field(player, &["image_url", "imageUrl"]));

    PlayerInfo {
        player_key: string_field(player, &["player_key", "playerKey"]).unwrap_or_default(),
        player_id: string_field(player, &["player_id", "playerId"]).unwrap_or_default(),
        name: full_name(player),
        nhl_team: string_field(player, &["editorial_team_abbr", "team"]).unwrap_or_default(),
        position: string_field(player, &["display_position", "primary_position"])
            .or_else(|| eligible.first().cloned())
            .unwrap_or_default(),
        eligible_positions: eligible,
        selected_position: selected,
        image_url,
        status,
        stats: extract_stats(player),
    }
}
