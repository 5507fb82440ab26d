//! Scoreboard normalization and matchup outcome computation.
//!
//! The league uses category (head-to-head) scoring: each stat category is
//! one "game", the matchup score is the count of categories won per side.
//! Nothing here sums or averages stat values.

use crate::extract::{
    extract_current_week, extract_logo_url, extract_manager_name, extract_matchups,
    extract_stats, flag_field, matchup_team_list, string_field,
};
use crate::models::{
    Matchup, MatchupStatus, MatchupTeam, Outcome, Score, Scoreboard, StatWinner,
};
use serde_json::Value;

/// Normalize a scoreboard payload into week + matchups.
pub fn normalize(raw: &Value) -> Scoreboard {
    let week = extract_current_week(raw);
    let matchups = extract_matchups(raw)
        .into_iter()
        .map(normalize_matchup)
        .collect();
    Scoreboard { week, matchups }
}

fn normalize_team(raw: &Value) -> MatchupTeam {
    MatchupTeam {
        team_key: string_field(raw, &["team_key", "teamKey"]).unwrap_or_default(),
        team_id: string_field(raw, &["team_id", "teamId"]).unwrap_or_default(),
        name: string_field(raw, &["name"]).unwrap_or_else(|| "Unknown Team".to_string()),
        logo_url: extract_logo_url(raw),
        manager_name: extract_manager_name(raw),
        stats: extract_stats(raw),
    }
}

fn normalize_stat_winner(raw: &Value) -> StatWinner {
    let winner = raw.get("stat_winner").unwrap_or(raw);
    StatWinner {
        stat_id: string_field(winner, &["stat_id", "statId"]).unwrap_or_default(),
        winner_team_key: string_field(winner, &["winner_team_key", "winnerTeamKey"]),
        is_tied: flag_field(winner, &["is_tied", "isTied"]),
    }
}

fn normalize_matchup(raw: &Value) -> Matchup {
    let mut team_iter = matchup_team_list(raw).into_iter().map(normalize_team);
    // Always exactly two sides; malformed matchups get a TBD placeholder
    // rather than failing normalization.
    let teams = [
        team_iter.next().unwrap_or_else(MatchupTeam::placeholder),
        team_iter.next().unwrap_or_else(MatchupTeam::placeholder),
    ];

    let raw_winners = raw
        .get("stat_winners")
        .or_else(|| raw.get("statWinners"))
        .and_then(Value::as_array)
        .map(|a| a.as_slice())
        .unwrap_or_default();
    let stat_winners: Vec<StatWinner> =
        raw_winners.iter().map(normalize_stat_winner).collect();

    let score = tally_score(&teams, &stat_winners);

    let status = MatchupStatus::from_raw(
        raw.get("status").and_then(Value::as_str).unwrap_or(""),
    );

    Matchup {
        week_start: string_field(raw, &["week_start", "weekStart"]).unwrap_or_default(),
        week_end: string_field(raw, &["week_end", "weekEnd"]).unwrap_or_default(),
        status,
        is_playoffs: flag_field(raw, &["is_playoffs", "isPlayoffs"]),
        is_consolation: flag_field(raw, &["is_consolation", "isConsolation"]),
        teams,
        stat_winners,
        score,
    }
}

fn tally_score(teams: &[MatchupTeam; 2], stat_winners: &[StatWinner]) -> Score {
    let mut score = Score::default();
    for sw in stat_winners {
        if sw.is_tied {
            score.ties += 1;
        } else if let Some(winner) = &sw.winner_team_key {
            if *winner == teams[0].team_key {
                score.team1_wins += 1;
            } else if *winner == teams[1].team_key {
                score.team2_wins += 1;
            }
        }
    }
    score
}

/// Head-to-head outcome of a matchup by category-win count. Equal tallies
/// are a tie; the outcome then carries both keys so a ledger can credit a
/// tie to each side.
pub fn compute_outcome(matchup: &Matchup) -> Outcome {
    let Score {
        team1_wins,
        team2_wins,
        ..
    } = matchup.score;
    let [team1, team2] = &matchup.teams;

    let key = |team: &MatchupTeam| {
        if team.team_key.is_empty() {
            None
        } else {
            Some(team.team_key.clone())
        }
    };

    if team1_wins > team2_wins {
        Outcome {
            winner_key: key(team1),
            loser_key: key(team2),
            is_tie: false,
        }
    } else if team2_wins > team1_wins {
        Outcome {
            winner_key: key(team2),
            loser_key: key(team1),
            is_tie: false,
        }
    } else {
        Outcome {
            winner_key: key(team1),
            loser_key: key(team2),
            is_tie: true,
        }
    }
}
