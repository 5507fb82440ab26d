//! `puckboard standings`: the league standings table.

use crate::commands::common::{fetch_with_cache, DashboardContext, TTL_SIX_HOURS};
use crate::error::Result;
use crate::models::StreakType;
use crate::normalize::standings;
use crate::yahoo::FantasySource;

pub async fn handle_standings(league_id: Option<String>, as_json: bool) -> Result<()> {
    let ctx = DashboardContext::new(league_id)?;
    let raw = fetch_with_cache(
        &ctx.cache,
        "league-standings",
        TTL_SIX_HOURS,
        ctx.client.standings(),
    )
    .await?;

    let rows = standings::normalize(&raw);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("No standings available yet.");
        return Ok(());
    }

    println!(
        "{:>4}  {:<24} {:>3} {:>3} {:>3}  {:>5}  {:>5}  {:<6} {}",
        "Rank", "Team", "W", "L", "T", "Pct", "GB", "Streak", "Manager"
    );
    for row in &rows {
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
            "{:>4}  {:<24} {:>3} {:>3} {:>3}  {:>5}  {:>5}  {:<6} {}",
            row.rank,
            row.name,
            row.wins,
            row.losses,
            row.ties,
            row.percentage,
            row.games_back,
            streak,
            row.manager_name
        );
    }
    Ok(())
}
