//! `puckboard records`: season-best single-week values per stat category.

use crate::aggregate::records::league_records;
use crate::commands::common::DashboardContext;
use crate::error::Result;

pub async fn handle_records(league_id: Option<String>, as_json: bool) -> Result<()> {
    let ctx = DashboardContext::new(league_id)?;
    let records = league_records(&ctx.client, &ctx.cache).await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.records.is_empty() {
        println!("The season has not started yet.");
        return Ok(());
    }

    println!("League records through week {}", records.current_week);
    for record in &records.records {
        println!();
        println!("{}", record.label);
        if record.holders.is_empty() {
            println!("  no record yet");
            continue;
        }
        for holder in &record.holders {
            let weeks: Vec<String> = holder.weeks.iter().map(u16::to_string).collect();
            let week_word = if holder.weeks.len() == 1 { "week" } else { "weeks" };
            println!(
                "  {:<24} {:>8}  ({} {})",
                holder.team_name,
                holder.display_value,
                week_word,
                weeks.join(", ")
            );
        }
    }
    Ok(())
}
