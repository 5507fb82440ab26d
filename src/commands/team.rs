//! `puckboard team`: one team's profile joined with its standings row.

use serde_json::json;

use crate::commands::common::{fetch_with_cache, DashboardContext, TTL_ONE_DAY, TTL_SIX_HOURS};
use crate::error::Result;
use crate::extract::{extract_logo_url, extract_manager_name, string_field};
use crate::models::StreakType;
use crate::normalize::standings;
use crate::yahoo::FantasySource;

pub async fn handle_team(league_id: Option<String>, team_id: String, as_json: bool) -> Result<()> {
    let ctx = DashboardContext::new(league_id)?;

    let meta_raw = fetch_with_cache(
        &ctx.cache,
        &format!("team-{}", team_id),
        TTL_ONE_DAY,
        ctx.client.team_meta(&team_id),
    )
    .await?;
    let standings_raw = fetch_with_cache(
        &ctx.cache,
        "league-standings",
        TTL_SIX_HOURS,
        ctx.client.standings(),
    )
    .await?;

    let team_raw = meta_raw.get("team").unwrap_or(&meta_raw);
    let name = string_field(team_raw, &["name"]).unwrap_or_else(|| "Unknown Team".to_string());
    let manager = extract_manager_name(team_raw);
    let logo_url = extract_logo_url(team_raw);
    let moves = string_field(team_raw, &["number_of_moves", "numberOfMoves"]);
    let trades = string_field(team_raw, &["number_of_trades", "numberOfTrades"]);
    let waiver_priority = string_field(team_raw, &["waiver_priority", "waiverPriority"]);

    let rows = standings::normalize(&standings_raw);
    let standing = rows.iter().find(|s| s.team_id == team_id);

    if as_json {
        let profile = json!({
            "teamId": team_id,
            "name": name,
            "managerName": manager,
            "logoUrl": logo_url,
            "numberOfMoves": moves,
            "numberOfTrades": trades,
            "waiverPriority": waiver_priority,
            "standing": standing,
        });
        println!("{}", serde_json::to_string_pretty(&profile)?);
        return Ok(());
    }

    println!("{} (team {})", name, team_id);
    if !manager.is_empty() {
        println!("  Manager:         {}", manager);
    }
    if let Some(url) = &logo_url {
        println!("  Logo:            {}", url);
    }
    if let Some(moves) = &moves {
        println!("  Moves:           {}", moves);
    }
    if let Some(trades) = &trades {
        println!("  Trades:          {}", trades);
    }
    if let Some(priority) = &waiver_priority {
        println!("  Waiver priority: {}", priority);
    }

    match standing {
        Some(row) => {
            let streak = if row.streak_value == 0 {
                "-".to_string()
            } else {
                let kind = match row.streak_type {
                    StreakType::Win => "W",
                    StreakType::Loss => "L",
                    StreakType::Tie => "T",
                };
                format!("{}{}", kind, row.streak_value)
            };
            println!(
                "  Standing:        #{} ({}-{}-{}, {} Pct, {} GB, streak {})",
                row.rank,
                row.wins,
                row.losses,
                row.ties,
                row.percentage,
                row.games_back,
                streak
            );
            println!(
                "  Points:          {:.2} for / {:.2} against",
                row.points_for, row.points_against
            );
        }
        None => println!("  Standing:        not found in league standings"),
    }
    Ok(())
}
