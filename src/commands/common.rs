//! Shared command context and the cache-then-fetch flow every data
//! command follows.

use std::future::Future;

use serde_json::Value;

use crate::cache::{default_cache_root, TtlCache};
use crate::cli::types::LeagueKey;
use crate::error::Result;
use crate::yahoo::YahooApiClient;

// TTLs by data volatility. Settings and team metadata rarely change;
// standings, matchups, and rosters move during the season.
pub const TTL_SIX_HOURS: i64 = 6 * 60 * 60;
pub const TTL_ONE_DAY: i64 = 24 * 60 * 60;
pub const TTL_ONE_WEEK: i64 = 7 * 24 * 60 * 60;

/// Resources every command needs: an authenticated client and the cache.
pub struct DashboardContext {
    pub client: YahooApiClient,
    pub cache: TtlCache,
}

impl DashboardContext {
    pub fn new(league_id: Option<String>) -> Result<Self> {
        let league_key = LeagueKey::resolve(league_id)?;
        let client = YahooApiClient::from_env(league_key)?;
        let cache = TtlCache::new(default_cache_root());
        Ok(Self { client, cache })
    }
}

/// Cache-or-fetch: a hit returns the stored payload; a miss awaits `fetch`
/// and stores the result under `key` with `ttl_seconds` before returning.
pub async fn fetch_with_cache<F>(
    cache: &TtlCache,
    key: &str,
    ttl_seconds: i64,
    fetch: F,
) -> Result<Value>
where
    F: Future<Output = Result<Value>>,
{
    if let Some(value) = cache.get(key) {
        return Ok(value);
    }
    let value = fetch.await?;
    cache.set(key, value.clone(), ttl_seconds);
    Ok(value)
}
