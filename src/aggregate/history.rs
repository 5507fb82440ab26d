//! Week-by-week cumulative win/loss/tie ledger for every team.

use std::collections::BTreeMap;

use serde_json::Value;

use super::{fetch_week_scoreboards, RESULT_TTL};
use crate::cache::TtlCache;
use crate::error::Result;
use crate::extract::{extract_current_week, extract_teams};
use crate::models::{Outcome, StandingsHistory, TeamRecord, WeekSnapshot};
use crate::normalize::scoreboard;
use crate::yahoo::FantasySource;

const CACHE_KEY: &str = "standings-history";

/// Build the season ledger: for each week 1..=current, every known team's
/// cumulative `{wins, losses, ties}` as of that week. Snapshots are running
/// totals, not per-week deltas, and each one is an independent copy.
pub async fn standings_history<C: FantasySource>(
    client: &C,
    cache: &TtlCache,
) -> Result<StandingsHistory> {
    if let Some(cached) = cache.get(CACHE_KEY) {
        if let Ok(history) = serde_json::from_value(cached) {
            return Ok(history);
        }
    }

    let scoreboard_raw = client.scoreboard(None).await?;
    let current_week = extract_current_week(&scoreboard_raw);

    // Season not started: an empty ledger, not an error.
    if current_week.is_preseason() {
        return Ok(StandingsHistory {
            current_week,
            teams: Vec::new(),
            weekly_standings: Vec::new(),
        });
    }

    let standings_raw = client.standings().await?;
    let teams = extract_teams(&standings_raw);
    if teams.is_empty() {
        return Ok(StandingsHistory {
            current_week,
            teams,
            weekly_standings: Vec::new(),
        });
    }

    let weeks = fetch_week_scoreboards(client, cache, current_week).await;

    // Records are tracked only for teams known from the standings endpoint;
    // outcomes naming anyone else are dropped.
    let mut cumulative: BTreeMap<String, TeamRecord> = teams
        .iter()
        .map(|t| (t.team_key.clone(), TeamRecord::default()))
        .collect();

    let mut weekly_standings = Vec::with_capacity(weeks.len());
    for week_data in &weeks {
        if let Some(data) = &week_data.data {
            for outcome in week_outcomes(data) {
                apply_outcome(&mut cumulative, &outcome);
            }
        }
        // Deep-copy snapshot: later weeks must not retroactively change it
        weekly_standings.push(WeekSnapshot {
            week: week_data.week,
            records: cumulative.clone(),
        });
    }

    let history = StandingsHistory {
        current_week,
        teams,
        weekly_standings,
    };
    cache.set(CACHE_KEY, serde_json::to_value(&history)?, RESULT_TTL);
    Ok(history)
}

fn week_outcomes(data: &Value) -> Vec<Outcome> {
    scoreboard::normalize(data)
        .matchups
        .iter()
        // A matchup that arrived with fewer than two real teams carries a
        // TBD placeholder; its 0-0 "tie" is noise, not a result.
        .filter(|m| m.teams.iter().all(|t| !t.team_key.is_empty()))
        .map(scoreboard::compute_outcome)
        .collect()
}

fn apply_outcome(cumulative: &mut BTreeMap<String, TeamRecord>, outcome: &Outcome) {
    if outcome.is_tie {
        for key in [&outcome.winner_key, &outcome.loser_key].into_iter().flatten() {
            if let Some(record) = cumulative.get_mut(key) {
                record.ties += 1;
            }
        }
    } else {
        if let Some(winner) = &outcome.winner_key {
            if let Some(record) = cumulative.get_mut(winner) {
                record.wins += 1;
            }
        }
        if let Some(loser) = &outcome.loser_key {
            if let Some(record) = cumulative.get_mut(loser) {
                record.losses += 1;
            }
        }
    }
}
