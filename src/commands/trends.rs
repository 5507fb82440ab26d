//! `puckboard trends`: week-by-week movement of one stat across players.

use crate::aggregate::trends::{player_trends, trail_start};
use crate::commands::common::DashboardContext;
use crate::error::Result;
use crate::models::PlayerWeekStats;
use crate::stats::{lower_is_better_sort, stat_label};

pub async fn handle_trends(
    league_id: Option<String>,
    stat: Option<String>,
    limit: usize,
    as_json: bool,
) -> Result<()> {
    let ctx = DashboardContext::new(league_id)?;
    let trends = player_trends(&ctx.client, &ctx.cache).await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&trends)?);
        return Ok(());
    }

    if trends.trends.is_empty() {
        println!("No trend data available yet.");
        return Ok(());
    }

    let sort_stat = stat.unwrap_or_else(|| "1".to_string());
    let label = stat_label(&sort_stat)
        .map(str::to_string)
        .unwrap_or_else(|| format!("#{}", sort_stat));

    let current = trends.current_week.as_u16();
    let weeks: Vec<u16> = (trail_start(current)..=current).collect();

    let mut rows: Vec<(&String, &Vec<PlayerWeekStats>, f64)> = trends
        .trends
        .iter()
        .map(|(key, series)| (key, series, series_total(series, &sort_stat)))
        .collect();
    rows.sort_by(|a, b| {
        let ordering = a.2.partial_cmp(&b.2).unwrap_or(std::cmp::Ordering::Equal);
        if lower_is_better_sort(&sort_stat) {
            ordering
        } else {
            ordering.reverse()
        }
    });
    rows.truncate(limit);

    println!(
        "{} by week ({}..{}), top {} players",
        label,
        weeks[0],
        current,
        rows.len()
    );
    let header: Vec<String> = weeks.iter().map(|w| format!("{:>6}", format!("Wk {}", w))).collect();
    println!("{:<24} {} {:>8}", "Player", header.join(" "), "Total");
    for (player_key, series, total) in rows {
        let cells: Vec<String> = weeks
            .iter()
            .map(|w| format!("{:>6}", week_display(series, *w, &sort_stat)))
            .collect();
        println!("{:<24} {} {:>8}", player_key, cells.join(" "), total);
    }
    Ok(())
}

fn week_display<'a>(series: &'a [PlayerWeekStats], week: u16, stat_id: &str) -> &'a str {
    series
        .iter()
        .find(|w| w.week == week)
        .and_then(|w| w.stats.iter().find(|s| s.stat_id == stat_id))
        .map(|s| s.value.as_str())
        .unwrap_or("-")
}

fn series_total(series: &[PlayerWeekStats], stat_id: &str) -> f64 {
    series
        .iter()
        .filter_map(|w| {
            w.stats
                .iter()
                .find(|s| s.stat_id == stat_id)
                .and_then(|s| match s.value.as_str() {
                    "" | "-" => None,
                    v => v.parse::<f64>().ok(),
                })
        })
        .sum()
}
