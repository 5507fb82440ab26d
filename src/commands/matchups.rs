//! `puckboard matchups`: weekly head-to-head matchups with category detail.

use crate::cli::types::Week;
use crate::commands::common::{fetch_with_cache, DashboardContext, TTL_SIX_HOURS};
use crate::error::Result;
use crate::models::Matchup;
use crate::normalize::scoreboard;
use crate::stats::stat_label;
use crate::yahoo::FantasySource;

pub async fn handle_matchups(
    league_id: Option<String>,
    week: Option<Week>,
    as_json: bool,
) -> Result<()> {
    let ctx = DashboardContext::new(league_id)?;

    let cache_key = match week {
        Some(w) => format!("weekly-matchups-{}", w),
        None => "weekly-matchups-current".to_string(),
    };
    let raw = fetch_with_cache(
        &ctx.cache,
        &cache_key,
        TTL_SIX_HOURS,
        ctx.client.scoreboard(week),
    )
    .await?;

    let board = scoreboard::normalize(&raw);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&board)?);
        return Ok(());
    }

    if board.matchups.is_empty() {
        println!("No matchups found for week {}.", board.week);
        return Ok(());
    }

    println!("Week {} ({} matchups)", board.week, board.matchups.len());
    for matchup in &board.matchups {
        println!();
        print_matchup(matchup);
    }
    Ok(())
}

fn print_matchup(matchup: &Matchup) {
    let mut tags = Vec::new();
    if matchup.is_playoffs {
        tags.push("Playoffs");
    }
    if matchup.is_consolation {
        tags.push("Consolation");
    }
    let suffix = if tags.is_empty() {
        String::new()
    } else {
        format!("  [{}]", tags.join(", "))
    };

    let [team1, team2] = &matchup.teams;
    println!(
        "[{}] {} {}-{}-{} {}{}",
        matchup.status.label(),
        team1.name,
        matchup.score.team1_wins,
        matchup.score.team2_wins,
        matchup.score.ties,
        team2.name,
        suffix
    );

    for winner in &matchup.stat_winners {
        let label = stat_label(&winner.stat_id)
            .map(str::to_string)
            .unwrap_or_else(|| format!("#{}", winner.stat_id));
        let mark1 = side_mark(winner.is_tied, &winner.winner_team_key, &team1.team_key);
        let mark2 = side_mark(winner.is_tied, &winner.winner_team_key, &team2.team_key);
        println!(
            "  {:>5}  {:>8}{} | {:<8}{}",
            label,
            team1.stat_value(&winner.stat_id),
            mark1,
            team2.stat_value(&winner.stat_id),
            mark2
        );
    }
}

fn side_mark(is_tied: bool, winner_key: &Option<String>, team_key: &str) -> &'static str {
    if is_tied {
        return "=";
    }
    match winner_key {
        Some(key) if key == team_key => "*",
        _ => " ",
    }
}
