//! `puckboard roster`: one team's lineup, grouped by slot.

use serde_json::Value;

use crate::aggregate::roster_week_cache_key;
use crate::cli::types::Week;
use crate::commands::common::{DashboardContext, TTL_SIX_HOURS};
use crate::error::Result;
use crate::models::PlayerInfo;
use crate::normalize::roster;
use crate::stats::{stat_label, GOALIE_STAT_IDS, SKATER_STAT_IDS};
use crate::yahoo::FantasySource;

pub async fn handle_roster(
    league_id: Option<String>,
    team_id: String,
    week: Option<Week>,
    as_json: bool,
) -> Result<()> {
    let ctx = DashboardContext::new(league_id)?;

    let cache_key = match week {
        Some(w) => roster_week_cache_key(&team_id, w.as_u16()),
        None => format!("team-{}-roster", team_id),
    };
    let raw = match ctx.cache.get(&cache_key) {
        Some(cached) => cached,
        None => {
            let fetched = fetch_roster(&ctx, &team_id, week).await?;
            ctx.cache.set(&cache_key, fetched.clone(), TTL_SIX_HOURS);
            fetched
        }
    };

    let players = roster::normalize(&raw);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&players)?);
        return Ok(());
    }

    if players.is_empty() {
        println!("No roster data for team {}.", team_id);
        return Ok(());
    }

    match week {
        Some(w) => println!("Roster for team {} (week {})", team_id, w),
        None => println!("Roster for team {}", team_id),
    }
    for (title, slots) in SLOT_GROUPS {
        let group: Vec<&PlayerInfo> = players
            .iter()
            .filter(|p| in_group(&p.selected_position, slots))
            .collect();
        if group.is_empty() {
            continue;
        }
        println!();
        println!("{}", title);
        for player in group {
            print_player(player);
        }
    }

    // Slots outside the known groups (leagues with Util or W spots).
    let ungrouped: Vec<&PlayerInfo> = players
        .iter()
        .filter(|p| !SLOT_GROUPS.iter().any(|(_, slots)| in_group(&p.selected_position, slots)))
        .collect();
    if !ungrouped.is_empty() {
        println!();
        println!("Other");
        for player in ungrouped {
            print_player(player);
        }
    }
    Ok(())
}

/// Stats-bearing roster first; on failure fall back to the plain roster
/// endpoint so the lineup still renders without stat columns.
async fn fetch_roster(ctx: &DashboardContext, team_id: &str, week: Option<Week>) -> Result<Value> {
    match ctx.client.roster_players(team_id, week).await {
        Ok(payload) => Ok(payload),
        Err(_) => ctx.client.team_roster(team_id).await,
    }
}

const SLOT_GROUPS: &[(&str, &[&str])] = &[
    ("Forwards", &["C", "LW", "RW", "F"]),
    ("Defense", &["D"]),
    ("Goalies", &["G"]),
    ("Bench", &["BN"]),
    ("Injured Reserve", &["IR", "IR+"]),
];

fn in_group(selected: &str, slots: &[&str]) -> bool {
    slots.contains(&selected)
}

fn print_player(player: &PlayerInfo) {
    let stat_ids: &[&str] = if player.is_goalie() {
        GOALIE_STAT_IDS
    } else {
        SKATER_STAT_IDS
    };
    let values: Vec<String> = stat_ids
        .iter()
        .map(|id| {
            let label = stat_label(id).unwrap_or(id);
            format!("{} {}", label, player.stat_display(id))
        })
        .collect();
    let status = player
        .status
        .as_deref()
        .map(|s| format!(" [{}]", s))
        .unwrap_or_default();
    println!(
        "  {:<4} {:<24}{} {:<4} {}",
        player.selected_position,
        player.name,
        status,
        player.nhl_team,
        values.join("  ")
    );
}
