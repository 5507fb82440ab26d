//! `puckboard players`: league-wide player leaderboard across every roster.
//!
//! Every team's roster is fetched in one concurrent fan-out and assembled
//! into a single cached payload; a team whose roster fetch fails appears
//! with a null roster so the leaderboard still renders from the rest.

use futures::future::join_all;
use serde_json::{json, Value};

use crate::cli::types::PositionFilter;
use crate::commands::common::{DashboardContext, TTL_SIX_HOURS};
use crate::error::Result;
use crate::extract::{extract_teams, object_list, string_field};
use crate::models::LeaderboardPlayer;
use crate::normalize::roster;
use crate::stats::{lower_is_better_sort, stat_label, GOALIE_STAT_IDS, SKATER_STAT_IDS};
use crate::yahoo::FantasySource;

const CACHE_KEY: &str = "all-players-stats";

pub async fn handle_players(
    league_id: Option<String>,
    position: Option<PositionFilter>,
    stat: Option<String>,
    limit: usize,
    as_json: bool,
) -> Result<()> {
    let ctx = DashboardContext::new(league_id)?;

    let raw = match ctx.cache.get(CACHE_KEY) {
        Some(cached) => cached,
        None => {
            let assembled = assemble_rosters(&ctx).await?;
            ctx.cache.set(CACHE_KEY, assembled.clone(), TTL_SIX_HOURS);
            assembled
        }
    };

    let filter = position.unwrap_or(PositionFilter::AllSkaters);
    let sort_stat = stat.unwrap_or_else(|| default_sort_stat(filter).to_string());

    let mut players = collect_players(&raw);
    players.retain(|p| matches_filter(p, filter));
    sort_players(&mut players, &sort_stat);
    players.truncate(limit);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&players)?);
        return Ok(());
    }

    if players.is_empty() {
        println!("No rostered players match that filter.");
        return Ok(());
    }

    let stat_ids: &[&str] = if filter == PositionFilter::Goalie {
        GOALIE_STAT_IDS
    } else {
        SKATER_STAT_IDS
    };
    print_leaderboard(&players, stat_ids, &sort_stat, filter);
    Ok(())
}

/// Fetch every team's roster concurrently and pack the results into one
/// payload shaped `{teams: [{teamId, teamName, roster}]}`.
async fn assemble_rosters(ctx: &DashboardContext) -> Result<Value> {
    let standings_raw = ctx.client.standings().await?;
    let teams = extract_teams(&standings_raw);

    let fetches = teams.iter().map(|team| async move {
        let roster = match ctx.client.roster_players(&team.team_id, None).await {
            Ok(payload) => payload,
            Err(err) => {
                eprintln!("⚠ Failed to fetch roster for {}: {}", team.name, err);
                Value::Null
            }
        };
        json!({
            "teamId": team.team_id,
            "teamName": team.name,
            "roster": roster,
        })
    });

    let entries: Vec<Value> = join_all(fetches).await;
    Ok(json!({ "teams": entries }))
}

/// Flatten the assembled payload into players tagged with their fantasy
/// team. Null rosters (failed fetches) contribute nothing.
fn collect_players(raw: &Value) -> Vec<LeaderboardPlayer> {
    let mut players = Vec::new();
    let Some(teams) = raw.get("teams") else {
        return players;
    };
    for entry in object_list(teams) {
        let fantasy_team =
            string_field(entry, &["teamName"]).unwrap_or_else(|| "Unknown Team".to_string());
        let Some(roster_raw) = entry.get("roster").filter(|r| !r.is_null()) else {
            continue;
        };
        for player in roster::normalize(roster_raw) {
            players.push(LeaderboardPlayer {
                fantasy_team: fantasy_team.clone(),
                player,
            });
        }
    }
    players
}

fn default_sort_stat(filter: PositionFilter) -> &'static str {
    if filter == PositionFilter::Goalie {
        "19"
    } else {
        "1"
    }
}

fn matches_filter(entry: &LeaderboardPlayer, filter: PositionFilter) -> bool {
    let player = &entry.player;
    match filter.position_code() {
        None => !player.is_goalie(),
        Some("G") => player.is_goalie(),
        Some(code) => {
            !player.is_goalie()
                && (player.position == code
                    || player.eligible_positions.iter().any(|p| p == code))
        }
    }
}

fn sort_players(players: &mut [LeaderboardPlayer], sort_stat: &str) {
    players.sort_by(|a, b| {
        let left = a.player.stat_number(sort_stat);
        let right = b.player.stat_number(sort_stat);
        let ordering = left.partial_cmp(&right).unwrap_or(std::cmp::Ordering::Equal);
        if lower_is_better_sort(sort_stat) {
            ordering
        } else {
            ordering.reverse()
        }
    });
}

fn print_leaderboard(
    players: &[LeaderboardPlayer],
    stat_ids: &[&str],
    sort_stat: &str,
    filter: PositionFilter,
) {
    let sort_label = stat_label(sort_stat)
        .map(str::to_string)
        .unwrap_or_else(|| format!("#{}", sort_stat));
    println!("Top {} ({}) by {}", players.len(), filter, sort_label);

    let stat_header: Vec<String> = stat_ids
        .iter()
        .map(|id| {
            let label = stat_label(id).map(str::to_string).unwrap_or_else(|| format!("#{}", id));
            format!("{:>6}", label)
        })
        .collect();
    println!(
        "{:>3}  {:<24} {:<4} {:<4} {:<20} {}",
        "#",
        "Player",
        "Pos",
        "NHL",
        "Fantasy Team",
        stat_header.join(" ")
    );

    for (rank, entry) in players.iter().enumerate() {
        let player = &entry.player;
        let values: Vec<String> = stat_ids
            .iter()
            .map(|id| format!("{:>6}", player.stat_display(id)))
            .collect();
        println!(
            "{:>3}  {:<24} {:<4} {:<4} {:<20} {}",
            rank + 1,
            player.name,
            player.position,
            player.nhl_team,
            entry.fantasy_team,
            values.join(" ")
        );
    }
}
