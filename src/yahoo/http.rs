//! Reqwest-backed Yahoo Fantasy v2 client.

use reqwest::{header::AUTHORIZATION, Client, StatusCode};
use serde_json::Value;

use crate::cli::types::{LeagueKey, Week};
use crate::error::{PuckboardError, Result};
use crate::yahoo::FantasySource;
use crate::ACCESS_TOKEN_ENV_VAR;

/// Base path for the Yahoo Fantasy v2 API.
pub const YAHOO_BASE_URL: &str = "https://fantasysports.yahooapis.com/fantasy/v2";

/// Authenticated Yahoo Fantasy API client for one league.
///
/// Carries an OAuth2 bearer token taken as given; the token exchange and
/// refresh flow live outside this tool.
#[derive(Debug)]
pub struct YahooApiClient {
    http: Client,
    token: String,
    league_key: LeagueKey,
}

impl YahooApiClient {
    pub fn new(league_key: LeagueKey, token: String) -> Self {
        Self {
            http: Client::new(),
            token,
            league_key,
        }
    }

    /// Build a client from `YAHOO_ACCESS_TOKEN`. A missing or empty token
    /// is an authentication failure, not a generic error.
    pub fn from_env(league_key: LeagueKey) -> Result<Self> {
        match std::env::var(ACCESS_TOKEN_ENV_VAR) {
            Ok(token) if !token.is_empty() => Ok(Self::new(league_key, token)),
            _ => Err(PuckboardError::NotAuthenticated {
                reason: format!("{} is not set", ACCESS_TOKEN_ENV_VAR),
            }),
        }
    }

    pub fn league_key(&self) -> &LeagueKey {
        &self.league_key
    }

    async fn fetch(&self, path: &str) -> Result<Value> {
        let url = format!("{YAHOO_BASE_URL}/{path}?format=json");

        let res = self
            .http
            .get(&url)
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .send()
            .await?;

        if res.status() == StatusCode::UNAUTHORIZED {
            return Err(PuckboardError::NotAuthenticated {
                reason: "Yahoo rejected the access token".to_string(),
            });
        }

        let res = res.error_for_status()?.json::<Value>().await?;
        Ok(res)
    }
}

impl FantasySource for YahooApiClient {
    async fn standings(&self) -> Result<Value> {
        self.fetch(&format!("league/{}/standings", self.league_key))
            .await
    }

    async fn scoreboard(&self, week: Option<Week>) -> Result<Value> {
        let path = match week {
            Some(w) => format!("league/{}/scoreboard;week={}", self.league_key, w),
            None => format!("league/{}/scoreboard", self.league_key),
        };
        self.fetch(&path).await
    }

    async fn settings(&self) -> Result<Value> {
        self.fetch(&format!("league/{}/settings", self.league_key))
            .await
    }

    async fn team_meta(&self, team_id: &str) -> Result<Value> {
        self.fetch(&format!("team/{}/metadata", self.league_key.team_key(team_id)))
            .await
    }

    async fn team_roster(&self, team_id: &str) -> Result<Value> {
        self.fetch(&format!("team/{}/roster", self.league_key.team_key(team_id)))
            .await
    }

    async fn roster_players(&self, team_id: &str, week: Option<Week>) -> Result<Value> {
        let team_key = self.league_key.team_key(team_id);
        let path = match week {
            Some(w) => format!("team/{};week={}/roster/players/stats", team_key, w),
            None => format!("team/{}/roster/players/stats", team_key),
        };
        self.fetch(&path).await
    }
}
