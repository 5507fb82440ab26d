//! Upstream Yahoo Fantasy API surface.

pub mod http;

pub use http::YahooApiClient;

use crate::cli::types::Week;
use crate::error::Result;
use serde_json::Value;

/// Read-only slice of the Yahoo Fantasy API the dashboard consumes.
///
/// Handlers and aggregators take an implementation by reference instead of
/// reaching for a process-global client, so tests inject a fake with canned
/// payloads. Every method returns the raw JSON as delivered; shape handling
/// is the normalizers' job.
pub trait FantasySource {
    /// League standings (`league/{key}/standings`).
    fn standings(&self) -> impl std::future::Future<Output = Result<Value>>;

    /// Weekly scoreboard; `None` means the current week.
    fn scoreboard(&self, week: Option<Week>)
        -> impl std::future::Future<Output = Result<Value>>;

    /// League settings and stat categories.
    fn settings(&self) -> impl std::future::Future<Output = Result<Value>>;

    /// Team metadata (name, logos, managers, transaction counts).
    fn team_meta(&self, team_id: &str) -> impl std::future::Future<Output = Result<Value>>;

    /// Roster without stats; the fallback when the stats subresource fails.
    fn team_roster(&self, team_id: &str)
        -> impl std::future::Future<Output = Result<Value>>;

    /// Roster with per-player stats, optionally for a specific week.
    fn roster_players(
        &self,
        team_id: &str,
        week: Option<Week>,
    ) -> impl std::future::Future<Output = Result<Value>>;
}
