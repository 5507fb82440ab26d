//! Error types for the Yahoo Fantasy Hockey dashboard CLI

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PuckboardError>;

#[derive(Error, Debug)]
pub enum PuckboardError {
    /// No usable credential: `YAHOO_ACCESS_TOKEN` is missing or the API
    /// rejected it. Mapped to a "connect your account" prompt at the
    /// boundary instead of a generic failure.
    #[error("not authenticated with Yahoo: {reason}")]
    NotAuthenticated { reason: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("League ID not provided and {env_var} environment variable not set")]
    MissingLeagueId { env_var: String },

    #[error("Failed to parse week number: {0}")]
    InvalidWeek(#[from] std::num::ParseIntError),

    #[error("Yahoo API returned no data")]
    NoData,
}

impl PuckboardError {
    /// True for the authentication failure class; everything else is a
    /// retryable upstream/server condition.
    pub fn is_auth(&self) -> bool {
        matches!(self, PuckboardError::NotAuthenticated { .. })
    }
}
