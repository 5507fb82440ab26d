//! `puckboard settings`: league configuration summary.

use serde_json::Value;

use crate::commands::common::{fetch_with_cache, DashboardContext, TTL_ONE_WEEK};
use crate::error::Result;
use crate::extract::{object_list, string_field};
use crate::yahoo::FantasySource;

pub async fn handle_settings(league_id: Option<String>, as_json: bool) -> Result<()> {
    let ctx = DashboardContext::new(league_id)?;
    let raw = fetch_with_cache(
        &ctx.cache,
        "league-settings",
        TTL_ONE_WEEK,
        ctx.client.settings(),
    )
    .await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&raw)?);
        return Ok(());
    }

    let league = raw.get("league").unwrap_or(&raw);
    let field = |names: &[&str]| string_field(league, names).unwrap_or_else(|| "-".to_string());

    println!("League {}", ctx.client.league_key());
    println!("  Name:         {}", field(&["name"]));
    println!("  Season:       {}", field(&["season"]));
    println!("  Teams:        {}", field(&["num_teams", "numTeams"]));
    println!("  Scoring:      {}", field(&["scoring_type", "scoringType"]));
    println!("  Current week: {}", field(&["current_week", "currentWeek"]));
    println!("  Start week:   {}", field(&["start_week", "startWeek"]));
    println!("  End week:     {}", field(&["end_week", "endWeek"]));

    let categories = stat_categories(league);
    if !categories.is_empty() {
        println!("  Categories:");
        for (stat_id, name) in categories {
            println!("    {:>3}  {}", stat_id, name);
        }
    }
    Ok(())
}

/// `(stat_id, display name)` pairs from the settings payload; tolerates the
/// `{stat: {...}}` entry envelope and a flat `stat_categories` list.
fn stat_categories(league: &Value) -> Vec<(String, String)> {
    let settings = league.get("settings").unwrap_or(league);
    let Some(stats) = settings
        .get("stat_categories")
        .and_then(|sc| sc.get("stats").or(Some(sc)))
    else {
        return Vec::new();
    };
    object_list(stats)
        .into_iter()
        .filter_map(|entry| {
            let stat = entry.get("stat").unwrap_or(entry);
            let stat_id = string_field(stat, &["stat_id", "statId"])?;
            let name = string_field(stat, &["display_name", "displayName", "name"])?;
            Some((stat_id, name))
        })
        .collect()
}
