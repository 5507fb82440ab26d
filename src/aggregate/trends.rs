//! Per-player stat trajectories over the recent stretch of the season.

use std::collections::BTreeMap;

use futures::future::join_all;
use serde_json::Value;

use super::{roster_week_cache_key, LIVE_WEEK_TTL, PAST_WEEK_TTL, RESULT_TTL};
use crate::cache::TtlCache;
use crate::cli::types::Week;
use crate::error::Result;
use crate::extract::{
    extract_current_week, extract_stats, extract_teams, roster_player_list, string_field,
};
use crate::models::{PlayerTrends, PlayerWeekStats};
use crate::yahoo::FantasySource;

const CACHE_KEY: &str = "player-trends";

/// Weeks of trailing data collected per player.
pub const TRAIL_WEEKS: u16 = 6;

/// First week of the trailing window ending at `current`.
pub fn trail_start(current: u16) -> u16 {
    current.saturating_sub(TRAIL_WEEKS - 1).max(1)
}

/// Build the week-by-week stat series for every rostered player over the
/// last `TRAIL_WEEKS` weeks. Weeks are walked in order so each player's
/// series comes out ascending; within a week the per-team roster fetches
/// fan out concurrently, and a failed fetch drops that team's players from
/// that week only.
pub async fn player_trends<C: FantasySource>(
    client: &C,
    cache: &TtlCache,
) -> Result<PlayerTrends> {
    if let Some(cached) = cache.get(CACHE_KEY) {
        if let Ok(trends) = serde_json::from_value(cached) {
            return Ok(trends);
        }
    }

    let scoreboard_raw = client.scoreboard(None).await?;
    let current_week = extract_current_week(&scoreboard_raw);
    if current_week.is_preseason() {
        return Ok(PlayerTrends {
            current_week,
            trends: BTreeMap::new(),
        });
    }

    let standings_raw = client.standings().await?;
    let teams = extract_teams(&standings_raw);
    if teams.is_empty() {
        return Ok(PlayerTrends {
            current_week,
            trends: BTreeMap::new(),
        });
    }

    let current = current_week.as_u16();
    let mut trends: BTreeMap<String, Vec<PlayerWeekStats>> = BTreeMap::new();

    for week in trail_start(current)..=current {
        let ttl = if week < current { PAST_WEEK_TTL } else { LIVE_WEEK_TTL };

        let fetches = teams.iter().map(|team| async move {
            let key = roster_week_cache_key(&team.team_id, week);
            if let Some(data) = cache.get(&key) {
                return Some(data);
            }
            match client.roster_players(&team.team_id, Some(Week::new(week))).await {
                Ok(data) => {
                    cache.set(&key, data.clone(), ttl);
                    Some(data)
                }
                Err(err) => {
                    eprintln!(
                        "⚠ Failed to fetch roster for team {} week {}: {}",
                        team.team_id, week, err
                    );
                    None
                }
            }
        });

        for roster_raw in join_all(fetches).await.into_iter().flatten() {
            collect_roster(&roster_raw, week, &mut trends);
        }
    }

    let result = PlayerTrends {
        current_week,
        trends,
    };
    cache.set(CACHE_KEY, serde_json::to_value(&result)?, RESULT_TTL);
    Ok(result)
}

fn collect_roster(
    raw: &Value,
    week: u16,
    trends: &mut BTreeMap<String, Vec<PlayerWeekStats>>,
) {
    for player in roster_player_list(raw) {
        let Some(player_key) = string_field(player, &["player_key", "playerKey"]) else {
            continue;
        };
        trends.entry(player_key).or_default().push(PlayerWeekStats {
            week,
            stats: extract_stats(player),
        });
    }
}
