//! Yahoo Fantasy Hockey league dashboard.
//!
//! Pulls league data from the Yahoo Fantasy v2 API, normalizes the
//! shape-shifting payloads into flat view models, and renders standings,
//! matchups, rosters, a player leaderboard, and cross-week aggregations
//! (standings history, league records). All responses go through a
//! two-level TTL cache so repeat invocations stay off the network.

pub mod aggregate;
pub mod cache;
pub mod cli;
pub mod commands;
pub mod error;
pub mod extract;
pub mod models;
pub mod normalize;
pub mod stats;
pub mod yahoo;

pub use cache::TtlCache;
pub use cli::types::{LeagueKey, PositionFilter, Week};
pub use error::{PuckboardError, Result};

/// OAuth2 bearer token for the Yahoo Fantasy API. Token exchange and
/// refresh live outside this tool.
pub const ACCESS_TOKEN_ENV_VAR: &str = "YAHOO_ACCESS_TOKEN";

/// Numeric league id, combined with the game key into `{game}.l.{id}`.
pub const LEAGUE_ID_ENV_VAR: &str = "YAHOO_LEAGUE_ID";

/// Yahoo game key prefix; `nhl` when unset.
pub const GAME_KEY_ENV_VAR: &str = "YAHOO_GAME_KEY";
