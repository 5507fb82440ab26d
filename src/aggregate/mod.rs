//! Cross-week aggregations: the standings-history ledger and the league
//! records board.
//!
//! Both walk every week of the season so far, reusing the per-week
//! scoreboard cache between each other and across runs. A week that fails
//! to fetch becomes a gap, never a request failure: partial data beats no
//! data on a dashboard.

pub mod history;
pub mod records;
pub mod trends;

use crate::cache::TtlCache;
use crate::cli::types::Week;
use crate::yahoo::FantasySource;
use futures::future::join_all;
use serde_json::Value;

/// Past-week scoreboards are immutable once the week closes.
pub const PAST_WEEK_TTL: i64 = 7 * 24 * 60 * 60;
/// The current week is still being played.
pub const LIVE_WEEK_TTL: i64 = 6 * 60 * 60;
/// Assembled aggregation results.
pub const RESULT_TTL: i64 = 6 * 60 * 60;

/// One week's scoreboard payload; `None` marks a fetch gap.
pub struct WeekData {
    pub week: u16,
    pub data: Option<Value>,
}

/// Cache key for one week's scoreboard.
pub fn week_cache_key(week: u16) -> String {
    format!("scoreboard-week-{}", week)
}

/// Cache key for one team's roster in one week; shared between the roster
/// command and the trends aggregator so neither refetches the other's data.
pub fn roster_week_cache_key(team_id: &str, week: u16) -> String {
    format!("roster-week-{}-{}", team_id, week)
}

/// Fetch scoreboards for weeks `1..=current` as an unordered concurrent
/// fan-out, reusing cached weeks and only hitting the API for the rest.
///
/// The fan-in re-sorts ascending by week before returning: callers fold
/// week results into cumulative state, and folding out of order corrupts
/// the snapshot sequence.
pub async fn fetch_week_scoreboards<C: FantasySource>(
    client: &C,
    cache: &TtlCache,
    current_week: Week,
) -> Vec<WeekData> {
    let current = current_week.as_u16();

    let fetches = (1..=current).map(|week| async move {
        let key = week_cache_key(week);
        if let Some(data) = cache.get(&key) {
            return WeekData { week, data: Some(data) };
        }

        let ttl = if week < current { PAST_WEEK_TTL } else { LIVE_WEEK_TTL };
        match client.scoreboard(Some(Week::new(week))).await {
            Ok(data) => {
                cache.set(&key, data.clone(), ttl);
                WeekData { week, data: Some(data) }
            }
            Err(err) => {
                eprintln!("⚠ Failed to fetch scoreboard for week {}: {}", week, err);
                WeekData { week, data: None }
            }
        }
    });

    let mut weeks = join_all(fetches).await;
    weeks.sort_by_key(|w| w.week);
    weeks
}
