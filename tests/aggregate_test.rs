mod common;

use std::collections::HashMap;

use serde_json::json;
use tempfile::tempdir;

use common::{
    h2h_matchup, roster_payload, scoreboard_payload, standings_payload, stats_matchup,
    team_with_stats, FakeSource,
};
use puckboard::aggregate::{
    history::standings_history, records::league_records, trends::player_trends,
};
use puckboard::models::TeamRecord;
use puckboard::TtlCache;

fn record(wins: u32, losses: u32, ties: u32) -> TeamRecord {
    TeamRecord { wins, losses, ties }
}

fn three_week_source() -> FakeSource {
    // Week 1: A beats B. Week 2: even split. Week 3: B beats A.
    let weekly_scoreboards: HashMap<u16, _> = HashMap::from([
        (1, scoreboard_payload(1, vec![h2h_matchup("A", "B", 3, 1, 0)])),
        (2, scoreboard_payload(2, vec![h2h_matchup("A", "B", 2, 2, 1)])),
        (3, scoreboard_payload(3, vec![h2h_matchup("A", "B", 1, 4, 0)])),
    ]);
    FakeSource {
        standings: standings_payload(&[("A", "Alpha"), ("B", "Beta")]),
        current_scoreboard: scoreboard_payload(3, vec![]),
        weekly_scoreboards,
        ..FakeSource::default()
    }
}

#[tokio::test]
async fn history_snapshots_are_cumulative() {
    let dir = tempdir().unwrap();
    let cache = TtlCache::new(dir.path().to_path_buf());

    let history = standings_history(&three_week_source(), &cache).await.unwrap();

    assert_eq!(history.current_week.as_u16(), 3);
    assert_eq!(history.teams.len(), 2);
    assert_eq!(history.weekly_standings.len(), 3);

    let weeks: Vec<u16> = history.weekly_standings.iter().map(|s| s.week).collect();
    assert_eq!(weeks, vec![1, 2, 3]);

    assert_eq!(history.weekly_standings[0].records["A"], record(1, 0, 0));
    assert_eq!(history.weekly_standings[0].records["B"], record(0, 1, 0));
    assert_eq!(history.weekly_standings[1].records["A"], record(1, 0, 1));
    assert_eq!(history.weekly_standings[1].records["B"], record(0, 1, 1));
    assert_eq!(history.weekly_standings[2].records["A"], record(1, 1, 1));
    assert_eq!(history.weekly_standings[2].records["B"], record(1, 1, 1));
}

#[tokio::test]
async fn history_failed_week_is_a_gap_not_an_error() {
    let dir = tempdir().unwrap();
    let cache = TtlCache::new(dir.path().to_path_buf());

    let mut source = three_week_source();
    source.fail_weeks.insert(2);

    let history = standings_history(&source, &cache).await.unwrap();

    // Week 2 contributed nothing, so its snapshot repeats week 1 and the
    // week 3 outcome lands on top of that.
    assert_eq!(history.weekly_standings.len(), 3);
    assert_eq!(
        history.weekly_standings[1].records,
        history.weekly_standings[0].records
    );
    assert_eq!(history.weekly_standings[2].records["A"], record(1, 1, 0));
    assert_eq!(history.weekly_standings[2].records["B"], record(1, 1, 0));
}

#[tokio::test]
async fn history_preseason_is_empty() {
    let dir = tempdir().unwrap();
    let cache = TtlCache::new(dir.path().to_path_buf());

    let source = FakeSource {
        current_scoreboard: scoreboard_payload(0, vec![]),
        ..FakeSource::default()
    };

    let history = standings_history(&source, &cache).await.unwrap();
    assert!(history.current_week.is_preseason());
    assert!(history.teams.is_empty());
    assert!(history.weekly_standings.is_empty());
}

#[tokio::test]
async fn history_outcomes_for_unknown_teams_are_dropped() {
    let dir = tempdir().unwrap();
    let cache = TtlCache::new(dir.path().to_path_buf());

    let source = FakeSource {
        standings: standings_payload(&[("A", "Alpha")]),
        current_scoreboard: scoreboard_payload(1, vec![]),
        weekly_scoreboards: HashMap::from([(
            1,
            scoreboard_payload(1, vec![h2h_matchup("A", "ghost", 3, 1, 0)]),
        )]),
        ..FakeSource::default()
    };

    let history = standings_history(&source, &cache).await.unwrap();
    let records = &history.weekly_standings[0].records;
    assert_eq!(records["A"], record(1, 0, 0));
    assert!(!records.contains_key("ghost"));
}

#[tokio::test]
async fn history_ignores_matchups_missing_a_side() {
    let dir = tempdir().unwrap();
    let cache = TtlCache::new(dir.path().to_path_buf());

    // One side never arrived; the TBD-padded matchup must not count as a
    // tie for the team that did.
    let lone = json!({
        "matchup": {
            "status": "postevent",
            "teams": [{"team": {"team_key": "A", "name": "Alpha"}}]
        }
    });
    let source = FakeSource {
        standings: standings_payload(&[("A", "Alpha"), ("B", "Beta")]),
        current_scoreboard: scoreboard_payload(1, vec![]),
        weekly_scoreboards: HashMap::from([(1, scoreboard_payload(1, vec![lone]))]),
        ..FakeSource::default()
    };

    let history = standings_history(&source, &cache).await.unwrap();
    assert_eq!(history.weekly_standings[0].records["A"], record(0, 0, 0));
    assert_eq!(history.weekly_standings[0].records["B"], record(0, 0, 0));
}

#[tokio::test]
async fn history_result_is_served_from_cache() {
    let dir = tempdir().unwrap();
    let cache = TtlCache::new(dir.path().to_path_buf());

    let first = standings_history(&three_week_source(), &cache).await.unwrap();

    // A source that fails everything: only a cache hit can satisfy this.
    let dead = FakeSource {
        fail_weeks: (1..=3).collect(),
        ..FakeSource::default()
    };
    let second = standings_history(&dead, &cache).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn records_dedupe_repeat_holder_across_weeks() {
    let dir = tempdir().unwrap();
    let cache = TtlCache::new(dir.path().to_path_buf());

    // Alpha posts the top goal week twice (weeks 1 and 3).
    let week = |n: u16, a_goals: &str, b_goals: &str| {
        scoreboard_payload(
            n,
            vec![stats_matchup(vec![
                team_with_stats("A", "Alpha", &[("1", a_goals)]),
                team_with_stats("B", "Beta", &[("1", b_goals)]),
            ])],
        )
    };
    let source = FakeSource {
        current_scoreboard: week(3, "10", "4"),
        weekly_scoreboards: HashMap::from([
            (1, week(1, "10", "6")),
            (2, week(2, "7", "8")),
            (3, week(3, "10", "4")),
        ]),
        ..FakeSource::default()
    };

    let records = league_records(&source, &cache).await.unwrap();
    let goals = records
        .records
        .iter()
        .find(|r| r.stat_id == "1")
        .unwrap();

    assert_eq!(goals.holders.len(), 1);
    let holder = &goals.holders[0];
    assert_eq!(holder.team_key, "A");
    assert_eq!(holder.value, 10.0);
    assert_eq!(holder.weeks, vec![1, 3]);
}

#[tokio::test]
async fn records_gaa_takes_the_minimum() {
    let dir = tempdir().unwrap();
    let cache = TtlCache::new(dir.path().to_path_buf());

    let board = scoreboard_payload(
        1,
        vec![stats_matchup(vec![
            team_with_stats("A", "Alpha", &[("23", "2.75")]),
            team_with_stats("B", "Beta", &[("23", "2.10")]),
        ])],
    );
    let source = FakeSource {
        current_scoreboard: board.clone(),
        weekly_scoreboards: HashMap::from([(1, board)]),
        ..FakeSource::default()
    };

    let records = league_records(&source, &cache).await.unwrap();
    let gaa = records.records.iter().find(|r| r.stat_id == "23").unwrap();
    assert!(gaa.lower_is_better);
    assert_eq!(gaa.holders[0].team_key, "B");
    assert_eq!(gaa.holders[0].value, 2.10);
}

#[tokio::test]
async fn records_unobserved_category_has_no_holders() {
    let dir = tempdir().unwrap();
    let cache = TtlCache::new(dir.path().to_path_buf());

    // Goals only; every other category stays empty.
    let board = scoreboard_payload(
        1,
        vec![stats_matchup(vec![
            team_with_stats("A", "Alpha", &[("1", "5")]),
            team_with_stats("B", "Beta", &[("1", "3")]),
        ])],
    );
    let source = FakeSource {
        current_scoreboard: board.clone(),
        weekly_scoreboards: HashMap::from([(1, board)]),
        ..FakeSource::default()
    };

    let records = league_records(&source, &cache).await.unwrap();
    let shutouts = records.records.iter().find(|r| r.stat_id == "27").unwrap();
    assert!(shutouts.holders.is_empty());
}

#[tokio::test]
async fn records_skip_placeholder_and_non_numeric_values() {
    let dir = tempdir().unwrap();
    let cache = TtlCache::new(dir.path().to_path_buf());

    let board = scoreboard_payload(
        1,
        vec![stats_matchup(vec![
            team_with_stats("A", "Alpha", &[("1", "-"), ("2", "n/a")]),
            team_with_stats("B", "Beta", &[("1", "4")]),
        ])],
    );
    let source = FakeSource {
        current_scoreboard: board.clone(),
        weekly_scoreboards: HashMap::from([(1, board)]),
        ..FakeSource::default()
    };

    let records = league_records(&source, &cache).await.unwrap();
    let goals = records.records.iter().find(|r| r.stat_id == "1").unwrap();
    assert_eq!(goals.holders.len(), 1);
    assert_eq!(goals.holders[0].team_key, "B");

    let assists = records.records.iter().find(|r| r.stat_id == "2").unwrap();
    assert!(assists.holders.is_empty());
}

#[tokio::test]
async fn records_preseason_is_empty() {
    let dir = tempdir().unwrap();
    let cache = TtlCache::new(dir.path().to_path_buf());

    let source = FakeSource {
        current_scoreboard: scoreboard_payload(0, vec![]),
        ..FakeSource::default()
    };

    let records = league_records(&source, &cache).await.unwrap();
    assert!(records.current_week.is_preseason());
    assert!(records.records.is_empty());
}

#[tokio::test]
async fn trends_series_merge_teams_with_weeks_ascending() {
    let dir = tempdir().unwrap();
    let cache = TtlCache::new(dir.path().to_path_buf());

    let source = FakeSource {
        standings: standings_payload(&[("A", "Alpha"), ("B", "Beta")]),
        current_scoreboard: scoreboard_payload(2, vec![]),
        rosters: HashMap::from([
            (("1".to_string(), 1), roster_payload(&[("p.x", &[("1", "2")])])),
            (("1".to_string(), 2), roster_payload(&[("p.x", &[("1", "1")])])),
            (("2".to_string(), 1), roster_payload(&[("p.y", &[("1", "0")])])),
            (("2".to_string(), 2), roster_payload(&[("p.y", &[("1", "3")])])),
        ]),
        ..FakeSource::default()
    };

    let trends = player_trends(&source, &cache).await.unwrap();

    assert_eq!(trends.current_week.as_u16(), 2);
    assert_eq!(trends.trends.len(), 2);

    let series = &trends.trends["p.x"];
    let weeks: Vec<u16> = series.iter().map(|w| w.week).collect();
    assert_eq!(weeks, vec![1, 2]);
    assert_eq!(series[0].stats[0].value, "2");
    assert_eq!(series[1].stats[0].value, "1");
}

#[tokio::test]
async fn trends_failed_roster_fetch_leaves_a_week_gap() {
    let dir = tempdir().unwrap();
    let cache = TtlCache::new(dir.path().to_path_buf());

    // Beta's week 1 roster is unavailable; p.y's series starts at week 2.
    let source = FakeSource {
        standings: standings_payload(&[("A", "Alpha"), ("B", "Beta")]),
        current_scoreboard: scoreboard_payload(2, vec![]),
        rosters: HashMap::from([
            (("1".to_string(), 1), roster_payload(&[("p.x", &[("1", "2")])])),
            (("1".to_string(), 2), roster_payload(&[("p.x", &[("1", "1")])])),
            (("2".to_string(), 2), roster_payload(&[("p.y", &[("1", "3")])])),
        ]),
        ..FakeSource::default()
    };

    let trends = player_trends(&source, &cache).await.unwrap();

    let weeks_y: Vec<u16> = trends.trends["p.y"].iter().map(|w| w.week).collect();
    assert_eq!(weeks_y, vec![2]);
    let weeks_x: Vec<u16> = trends.trends["p.x"].iter().map(|w| w.week).collect();
    assert_eq!(weeks_x, vec![1, 2]);
}

#[tokio::test]
async fn trends_window_covers_the_last_six_weeks_only() {
    let dir = tempdir().unwrap();
    let cache = TtlCache::new(dir.path().to_path_buf());

    let rosters: HashMap<(String, u16), _> = (1..=9)
        .map(|week| {
            (
                ("1".to_string(), week),
                roster_payload(&[("p.x", &[("1", "1")])]),
            )
        })
        .collect();
    let source = FakeSource {
        standings: standings_payload(&[("A", "Alpha")]),
        current_scoreboard: scoreboard_payload(9, vec![]),
        rosters,
        ..FakeSource::default()
    };

    let trends = player_trends(&source, &cache).await.unwrap();

    let weeks: Vec<u16> = trends.trends["p.x"].iter().map(|w| w.week).collect();
    assert_eq!(weeks, vec![4, 5, 6, 7, 8, 9]);
}

#[tokio::test]
async fn trends_preseason_is_empty() {
    let dir = tempdir().unwrap();
    let cache = TtlCache::new(dir.path().to_path_buf());

    let source = FakeSource {
        current_scoreboard: scoreboard_payload(0, vec![]),
        ..FakeSource::default()
    };

    let trends = player_trends(&source, &cache).await.unwrap();
    assert!(trends.current_week.is_preseason());
    assert!(trends.trends.is_empty());
}
