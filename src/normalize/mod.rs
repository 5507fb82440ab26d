//! Per-endpoint normalizers: raw Yahoo payloads in, flat view models out.
//!
//! Normalizers never fail. Malformed or missing input degrades to empty
//! lists, zero values, and placeholder strings; only network and auth
//! failures are exceptional, and those happen before normalization runs.

pub mod roster;
pub mod scoreboard;
pub mod standings;
