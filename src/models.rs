//! Flat view models produced by the normalization pipeline.
//!
//! Everything here is an immutable snapshot built fresh on a cache miss and
//! serialized as-is into the response cache, so every type derives both
//! `Serialize` and `Deserialize`. Field names follow the normalized JSON
//! contract (camelCase) the dashboard consumers expect.

use crate::cli::types::Week;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Minimal team identity, as enumerated from the standings endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamInfo {
    pub team_key: String,
    pub team_id: String,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreakType {
    Win,
    Loss,
    Tie,
}

/// One row of the league standings table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStanding {
    pub team_key: String,
    pub team_id: String,
    pub name: String,
    pub manager_name: String,
    pub logo_url: Option<String>,
    /// 1-based; unique and dense within one standings response.
    pub rank: u32,
    pub playoff_seed: u32,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    /// Win percentage as Yahoo formats it, e.g. `.667`.
    pub percentage: String,
    pub points_for: f64,
    pub points_against: f64,
    pub games_back: String,
    pub streak_type: StreakType,
    pub streak_value: u32,
}

/// One stat category value, both sides string-encoded as delivered upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatValue {
    pub stat_id: String,
    pub value: String,
}

/// One side of a weekly matchup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchupTeam {
    pub team_key: String,
    pub team_id: String,
    pub name: String,
    pub logo_url: Option<String>,
    pub manager_name: String,
    pub stats: Vec<StatValue>,
}

impl MatchupTeam {
    /// Placeholder side for malformed matchups that arrive with fewer than
    /// two teams; rendered as "TBD" rather than failing normalization.
    pub fn placeholder() -> Self {
        Self {
            team_key: String::new(),
            team_id: String::new(),
            name: "TBD".to_string(),
            logo_url: None,
            manager_name: String::new(),
            stats: Vec::new(),
        }
    }

    /// This team's value for a stat category, `"-"` when absent.
    pub fn stat_value(&self, stat_id: &str) -> &str {
        self.stats
            .iter()
            .find(|s| s.stat_id == stat_id)
            .map(|s| s.value.as_str())
            .unwrap_or("-")
    }
}

/// Which team took one stat category of a matchup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatWinner {
    pub stat_id: String,
    pub winner_team_key: Option<String>,
    pub is_tied: bool,
}

/// Category-win tally for a matchup. Each stat category is one "game".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    pub team1_wins: u32,
    pub team2_wins: u32,
    pub ties: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchupStatus {
    #[default]
    Preevent,
    Midevent,
    Postevent,
}

impl MatchupStatus {
    /// Raw status as carried by the scoreboard payload; anything
    /// unrecognized degrades to `preevent`.
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "postevent" => Self::Postevent,
            "midevent" => Self::Midevent,
            _ => Self::Preevent,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Postevent => "Final",
            Self::Midevent => "In Progress",
            Self::Preevent => "Upcoming",
        }
    }
}

/// A normalized weekly matchup: always exactly two teams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Matchup {
    pub week_start: String,
    pub week_end: String,
    pub status: MatchupStatus,
    pub is_playoffs: bool,
    pub is_consolation: bool,
    pub teams: [MatchupTeam; 2],
    pub stat_winners: Vec<StatWinner>,
    pub score: Score,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scoreboard {
    pub week: Week,
    pub matchups: Vec<Matchup>,
}

/// Head-to-head result of one matchup. On a tie both keys are populated so
/// the ledger can credit a tie to both sides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outcome {
    pub winner_key: Option<String>,
    pub loser_key: Option<String>,
    pub is_tie: bool,
}

/// Cumulative win/loss/tie counts for one team.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
}

/// Per-team cumulative records as of (and including) one week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekSnapshot {
    pub week: u16,
    pub records: BTreeMap<String, TeamRecord>,
}

/// Week-by-week cumulative ledger for the whole season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsHistory {
    pub current_week: Week,
    pub teams: Vec<TeamInfo>,
    pub weekly_standings: Vec<WeekSnapshot>,
}

/// A team that achieved a record value, with every week it did so.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordHolder {
    pub team_key: String,
    pub team_name: String,
    pub logo_url: Option<String>,
    pub value: f64,
    pub display_value: String,
    /// Ascending; a team hitting the record in several weeks is one holder.
    pub weeks: Vec<u16>,
}

/// Season-best for one stat category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatRecord {
    pub stat_id: String,
    pub label: String,
    pub lower_is_better: bool,
    /// Empty when no valid observation exists yet ("no record yet").
    pub holders: Vec<RecordHolder>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueRecords {
    pub current_week: Week,
    pub records: Vec<StatRecord>,
}

/// One week's stat line inside a player's trend series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerWeekStats {
    pub week: u16,
    pub stats: Vec<StatValue>,
}

/// Recent week-by-week stat series per player key, weeks ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerTrends {
    pub current_week: Week,
    pub trends: BTreeMap<String, Vec<PlayerWeekStats>>,
}

/// A rostered player with week/season stats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerInfo {
    pub player_key: String,
    pub player_id: String,
    pub name: String,
    /// NHL team abbreviation, e.g. `BOS`.
    pub nhl_team: String,
    pub position: String,
    pub eligible_positions: Vec<String>,
    /// Assigned lineup slot, `BN` when unknown.
    pub selected_position: String,
    pub image_url: Option<String>,
    /// Availability code (`IR`, `DTD`, `O`, ...), `None` when healthy.
    pub status: Option<String>,
    pub stats: Vec<StatValue>,
}

impl PlayerInfo {
    pub fn is_goalie(&self) -> bool {
        self.position == "G" || self.eligible_positions.iter().any(|p| p == "G")
    }

    /// Numeric stat value, 0 when missing or the upstream `"-"` placeholder.
    pub fn stat_number(&self, stat_id: &str) -> f64 {
        self.stats
            .iter()
            .find(|s| s.stat_id == stat_id)
            .and_then(|s| match s.value.as_str() {
                "" | "-" => None,
                v => v.parse::<f64>().ok(),
            })
            .unwrap_or(0.0)
    }

    pub fn stat_display(&self, stat_id: &str) -> &str {
        self.stats
            .iter()
            .find(|s| s.stat_id == stat_id)
            .map(|s| s.value.as_str())
            .unwrap_or("-")
    }
}

/// A player joined with the fantasy team that rosters them, for the
/// league-wide leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardPlayer {
    pub fantasy_team: String,
    #[serde(flatten)]
    pub player: PlayerInfo,
}
