//! `puckboard history`: each team's cumulative record, week by week.

use crate::aggregate::history::standings_history;
use crate::commands::common::DashboardContext;
use crate::error::Result;

pub async fn handle_history(league_id: Option<String>, as_json: bool) -> Result<()> {
    let ctx = DashboardContext::new(league_id)?;
    let history = standings_history(&ctx.client, &ctx.cache).await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&history)?);
        return Ok(());
    }

    if history.weekly_standings.is_empty() {
        println!("The season has not started yet.");
        return Ok(());
    }

    println!("Cumulative records through week {}", history.current_week);
    let header: Vec<String> = history
        .weekly_standings
        .iter()
        .map(|snap| format!("{:>7}", format!("Wk {}", snap.week)))
        .collect();
    println!("{:<24} {}", "Team", header.join(" "));

    for team in &history.teams {
        let trajectory: Vec<String> = history
            .weekly_standings
            .iter()
            .map(|snap| {
                snap.records
                    .get(&team.team_key)
                    .map(|r| format!("{:>7}", format!("{}-{}-{}", r.wins, r.losses, r.ties)))
                    .unwrap_or_else(|| format!("{:>7}", "-"))
            })
            .collect();
        println!("{:<24} {}", team.name, trajectory.join(" "));
    }
    Ok(())
}
