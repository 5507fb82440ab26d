//! League stat-category registry.
//!
//! Stat IDs are opaque Yahoo codes whose meaning is league configuration,
//! not derivable from the data. These tables cover the categories the
//! BrewZoo league scores; swap them out for a different league.

/// Short display label for a stat category.
pub fn stat_label(stat_id: &str) -> Option<&'static str> {
    let label = match stat_id {
        "1" => "G",
        "2" => "A",
        "8" => "PIM",
        "11" => "SHG",
        "12" => "PPP",
        "14" => "SOG",
        "31" => "HIT",
        "32" => "BLK",
        "19" => "W",
        "22" => "GA",
        "23" => "GAA",
        "24" => "SA",
        "25" => "SV",
        "26" => "SV%",
        "27" => "SO",
        _ => return None,
    };
    Some(label)
}

/// Skater categories in display order.
pub const SKATER_STAT_IDS: &[&str] = &["1", "2", "14", "31", "32", "8", "11"];

/// Goalie categories in display order.
pub const GOALIE_STAT_IDS: &[&str] = &["19", "22", "23", "25", "26", "27"];

pub fn is_goalie_stat(stat_id: &str) -> bool {
    GOALIE_STAT_IDS.contains(&stat_id)
}

/// Stats where a smaller value ranks higher on the player leaderboard
/// (goals against, goals-against average). Distinct from the record-table
/// flags below: the records page only treats GAA as lower-is-better.
pub fn lower_is_better_sort(stat_id: &str) -> bool {
    matches!(stat_id, "22" | "23")
}

/// One season-record category.
#[derive(Debug, Clone, Copy)]
pub struct RecordCategory {
    pub stat_id: &'static str,
    pub label: &'static str,
    pub lower_is_better: bool,
}

/// Categories tracked by the league records board, in display order.
pub const RECORD_CATEGORIES: &[RecordCategory] = &[
    RecordCategory { stat_id: "1", label: "Most Goals", lower_is_better: false },
    RecordCategory { stat_id: "2", label: "Most Assists", lower_is_better: false },
    RecordCategory { stat_id: "8", label: "Most Power Play Points", lower_is_better: false },
    RecordCategory { stat_id: "11", label: "Most SH Goals", lower_is_better: false },
    RecordCategory { stat_id: "14", label: "Most Shots on Goal", lower_is_better: false },
    RecordCategory { stat_id: "31", label: "Most Hits", lower_is_better: false },
    RecordCategory { stat_id: "32", label: "Most Blocks", lower_is_better: false },
    RecordCategory { stat_id: "19", label: "Most Goalie Wins", lower_is_better: false },
    RecordCategory { stat_id: "23", label: "Best GAA", lower_is_better: true },
    RecordCategory { stat_id: "26", label: "Best Save %", lower_is_better: false },
    RecordCategory { stat_id: "27", label: "Most Shutouts", lower_is_better: false },
];
