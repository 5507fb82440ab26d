//! Command-line interface: argument parsing and CLI-facing newtypes.

pub mod args;
pub mod types;

pub use args::{Cli, Command, CommonArgs};
pub use types::{LeagueKey, PositionFilter, Week};
