//! Clap argument definitions for the puckboard CLI.

use clap::{Args, Parser, Subcommand};

use crate::cli::types::{PositionFilter, Week};

#[derive(Debug, Parser)]
#[command(name = "puckboard", version, about = "Yahoo Fantasy Hockey league dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Flags shared by every subcommand.
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// League id (defaults to the YAHOO_LEAGUE_ID environment variable)
    #[arg(short, long)]
    pub league_id: Option<String>,

    /// Emit normalized JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// League standings table
    Standings {
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Weekly head-to-head matchups with per-category detail
    Matchups {
        #[command(flatten)]
        common: CommonArgs,

        /// Week number (defaults to the current week)
        #[arg(short, long)]
        week: Option<Week>,
    },
    /// Week-by-week cumulative record for every team
    History {
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Season-best single-week values per stat category
    Records {
        #[command(flatten)]
        common: CommonArgs,
    },
    /// League-wide player leaderboard across every roster
    Players {
        #[command(flatten)]
        common: CommonArgs,

        /// Position filter: skaters, C, LW, RW, D, or G
        #[arg(short, long)]
        position: Option<PositionFilter>,

        /// Stat id to sort by (defaults to goals, or wins for goalies)
        #[arg(short, long)]
        stat: Option<String>,

        /// Number of players to show
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
    /// Week-by-week movement of one stat across rostered players
    Trends {
        #[command(flatten)]
        common: CommonArgs,

        /// Stat id to track (defaults to goals)
        #[arg(short, long)]
        stat: Option<String>,

        /// Number of players to show
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
    /// One team's lineup, grouped by slot
    Roster {
        #[command(flatten)]
        common: CommonArgs,

        /// Team id within the league
        team_id: String,

        /// Week number (defaults to the season-to-date roster)
        #[arg(short, long)]
        week: Option<Week>,
    },
    /// One team's profile and standings row
    Team {
        #[command(flatten)]
        common: CommonArgs,

        /// Team id within the league
        team_id: String,
    },
    /// League configuration summary
    Settings {
        #[command(flatten)]
        common: CommonArgs,
    },
}
