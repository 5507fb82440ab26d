//! League records: each category's best single-week value and who hit it.

use std::collections::BTreeMap;

use serde_json::Value;

use super::{fetch_week_scoreboards, week_cache_key, LIVE_WEEK_TTL, RESULT_TTL};
use crate::cache::TtlCache;
use crate::error::Result;
use crate::extract::{
    extract_current_week, extract_logo_url, extract_matchups, extract_stats,
    matchup_team_list, string_field,
};
use crate::models::{LeagueRecords, RecordHolder, StatRecord};
use crate::stats::RECORD_CATEGORIES;
use crate::yahoo::FantasySource;

const CACHE_KEY: &str = "league-records";

/// One (team, week) stat observation.
struct Observation {
    team_key: String,
    team_name: String,
    logo_url: Option<String>,
    value: f64,
    display_value: String,
    week: u16,
}

/// Scan every week's scoreboard for per-team category values and reduce
/// each record category to its extreme (min when lower is better, else
/// max) plus every team that achieved it.
pub async fn league_records<C: FantasySource>(
    client: &C,
    cache: &TtlCache,
) -> Result<LeagueRecords> {
    if let Some(cached) = cache.get(CACHE_KEY) {
        if let Ok(records) = serde_json::from_value(cached) {
            return Ok(records);
        }
    }

    let scoreboard_raw = client.scoreboard(None).await?;
    let current_week = extract_current_week(&scoreboard_raw);

    if current_week.is_preseason() {
        return Ok(LeagueRecords {
            current_week,
            records: Vec::new(),
        });
    }

    // The current-week payload is already in hand; seed its week cache so
    // the fan-out below reuses it.
    cache.set(
        &week_cache_key(current_week.as_u16()),
        scoreboard_raw.clone(),
        LIVE_WEEK_TTL,
    );

    let weeks = fetch_week_scoreboards(client, cache, current_week).await;

    let mut observations: BTreeMap<String, Vec<Observation>> = BTreeMap::new();
    for week_data in &weeks {
        if let Some(data) = &week_data.data {
            collect_week_observations(data, week_data.week, &mut observations);
        }
    }

    let records = RECORD_CATEGORIES
        .iter()
        .map(|category| {
            let entries = observations
                .get(category.stat_id)
                .map(Vec::as_slice)
                .unwrap_or_default();
            StatRecord {
                stat_id: category.stat_id.to_string(),
                label: category.label.to_string(),
                lower_is_better: category.lower_is_better,
                holders: reduce_holders(entries, category.lower_is_better),
            }
        })
        .collect();

    let result = LeagueRecords {
        current_week,
        records,
    };
    cache.set(CACHE_KEY, serde_json::to_value(&result)?, RESULT_TTL);
    Ok(result)
}

/// Pull every team's numeric stat values out of one week's scoreboard.
/// Non-numeric values and the upstream `"-"` placeholder are discarded.
fn collect_week_observations(
    data: &Value,
    week: u16,
    observations: &mut BTreeMap<String, Vec<Observation>>,
) {
    for matchup in extract_matchups(data) {
        for team in matchup_team_list(matchup) {
            let team_key = string_field(team, &["team_key", "teamKey"]).unwrap_or_default();
            let team_name =
                string_field(team, &["name"]).unwrap_or_else(|| "Unknown Team".to_string());
            let logo_url = extract_logo_url(team);

            for stat in extract_stats(team) {
                if stat.stat_id.is_empty() || stat.value.is_empty() || stat.value == "-" {
                    continue;
                }
                let Ok(value) = stat.value.parse::<f64>() else {
                    continue;
                };
                observations.entry(stat.stat_id).or_default().push(Observation {
                    team_key: team_key.clone(),
                    team_name: team_name.clone(),
                    logo_url: logo_url.clone(),
                    value,
                    display_value: stat.value,
                    week,
                });
            }
        }
    }
}

/// Holders of the extreme value, deduplicated by team: a team that hit the
/// record in several weeks is one holder with all its weeks, not one entry
/// per week. Discovery order is preserved.
fn reduce_holders(entries: &[Observation], lower_is_better: bool) -> Vec<RecordHolder> {
    let Some(best) = entries
        .iter()
        .map(|e| e.value)
        .reduce(if lower_is_better { f64::min } else { f64::max })
    else {
        return Vec::new();
    };

    let mut holders: Vec<RecordHolder> = Vec::new();
    for entry in entries.iter().filter(|e| e.value == best) {
        if let Some(existing) = holders.iter_mut().find(|h| h.team_key == entry.team_key) {
            existing.weeks.push(entry.week);
            existing.weeks.sort_unstable();
        } else {
            holders.push(RecordHolder {
                team_key: entry.team_key.clone(),
                team_name: entry.team_name.clone(),
                logo_url: entry.logo_url.clone(),
                value: entry.value,
                display_value: entry.display_value.clone(),
                weeks: vec![entry.week],
            });
        }
    }
    holders
}
