//! CLI-facing newtypes: week numbers, league/team keys, position filter.

use crate::error::{PuckboardError, Result};
use crate::{GAME_KEY_ENV_VAR, LEAGUE_ID_ENV_VAR};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for a fantasy week number.
///
/// Week 0 is the sentinel for "no active week / season not started" and is
/// what the scoreboard extractor returns when the payload carries no week.
///
/// # Examples
///
/// ```rust
/// use puckboard::Week;
///
/// let week = Week::new(3);
/// assert_eq!(week.as_u16(), 3);
/// assert!(!week.is_preseason());
/// assert!(Week::new(0).is_preseason());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Week(pub u16);

impl Week {
    pub fn new(week: u16) -> Self {
        Self(week)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Week 0 means the season has not started.
    pub fn is_preseason(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Week {
    type Err = PuckboardError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}

/// Yahoo league key: `{game}.l.{league_id}`, e.g. `nhl.l.12345`.
///
/// Team keys hang off the league key as `{league_key}.t.{team_id}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeagueKey(String);

impl LeagueKey {
    pub fn from_parts(game_key: &str, league_id: &str) -> Self {
        Self(format!("{}.l.{}", game_key, league_id))
    }

    /// Resolve from an explicit `--league-id` argument or the
    /// `YAHOO_LEAGUE_ID` / `YAHOO_GAME_KEY` environment variables.
    pub fn resolve(league_id: Option<String>) -> Result<Self> {
        let game_key =
            std::env::var(GAME_KEY_ENV_VAR).unwrap_or_else(|_| "nhl".to_string());
        let league_id = match league_id {
            Some(id) => id,
            None => std::env::var(LEAGUE_ID_ENV_VAR).map_err(|_| {
                PuckboardError::MissingLeagueId {
                    env_var: LEAGUE_ID_ENV_VAR.to_string(),
                }
            })?,
        };
        Ok(Self::from_parts(&game_key, &league_id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Team key for a team id within this league.
    pub fn team_key(&self, team_id: &str) -> String {
        format!("{}.t.{}", self.0, team_id)
    }
}

impl fmt::Display for LeagueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Position filter for the league-wide player leaderboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionFilter {
    AllSkaters,
    Center,
    LeftWing,
    RightWing,
    Defense,
    Goalie,
}

impl PositionFilter {
    /// The roster-position code this filter matches against, if any.
    pub fn position_code(&self) -> Option<&'static str> {
        match self {
            PositionFilter::AllSkaters => None,
            PositionFilter::Center => Some("C"),
            PositionFilter::LeftWing => Some("LW"),
            PositionFilter::RightWing => Some("RW"),
            PositionFilter::Defense => Some("D"),
            PositionFilter::Goalie => Some("G"),
        }
    }
}

impl FromStr for PositionFilter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "SKATERS" | "ALL" | "ALL-SKATERS" => Ok(Self::AllSkaters),
            "C" => Ok(Self::Center),
            "LW" => Ok(Self::LeftWing),
            "RW" => Ok(Self::RightWing),
            "D" => Ok(Self::Defense),
            "G" => Ok(Self::Goalie),
            _ => Err(format!("Unrecognized position filter: {s:?}")),
        }
    }
}

impl fmt::Display for PositionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PositionFilter::AllSkaters => "Skaters",
            PositionFilter::Center => "C",
            PositionFilter::LeftWing => "LW",
            PositionFilter::RightWing => "RW",
            PositionFilter::Defense => "D",
            PositionFilter::Goalie => "G",
        };
        write!(f, "{}", s)
    }
}
