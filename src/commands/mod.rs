//! Command implementations for the Yahoo Fantasy Hockey dashboard CLI

pub mod common;
pub mod history;
pub mod matchups;
pub mod players;
pub mod records;
pub mod roster;
pub mod settings;
pub mod standings;
pub mod team;
pub mod trends;
