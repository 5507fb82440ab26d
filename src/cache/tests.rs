use super::*;
use serde_json::json;
use tempfile::tempdir;

#[test]
fn test_set_then_get_returns_value() {
    let dir = tempdir().unwrap();
    let cache = TtlCache::new(dir.path().to_path_buf());

    cache.set("league-standings", json!({"teams": 12}), 3600);
    assert_eq!(cache.get("league-standings"), Some(json!({"teams": 12})));
}

#[test]
fn test_missing_key_is_absent() {
    let dir = tempdir().unwrap();
    let cache = TtlCache::new(dir.path().to_path_buf());

    assert_eq!(cache.get("never-set"), None);
}

#[test]
fn test_zero_ttl_expires_on_write() {
    let dir = tempdir().unwrap();
    let cache = TtlCache::new(dir.path().to_path_buf());

    cache.set("scoreboard-week-1", json!([1, 2, 3]), 0);
    assert_eq!(cache.get("scoreboard-week-1"), None);
}

#[test]
fn test_negative_ttl_expires_on_write() {
    let dir = tempdir().unwrap();
    let cache = TtlCache::new(dir.path().to_path_buf());

    cache.set("scoreboard-week-2", json!("stale"), -60);
    assert_eq!(cache.get("scoreboard-week-2"), None);
}

#[test]
fn test_expired_entry_is_removed_and_stays_absent() {
    let dir = tempdir().unwrap();
    let cache = TtlCache::new(dir.path().to_path_buf());

    cache.set("weekly-matchups-current", json!({"week": 5}), -1);
    let path = cache.entry_path("weekly-matchups-current");
    assert!(path.exists());

    // First read finds the stale entry and purges it
    assert_eq!(cache.get("weekly-matchups-current"), None);
    assert!(!path.exists());
    assert_eq!(cache.memory_len(), 0);

    // Absence is idempotent
    assert_eq!(cache.get("weekly-matchups-current"), None);
}

#[test]
fn test_overwrite_replaces_value_and_expiry() {
    let dir = tempdir().unwrap();
    let cache = TtlCache::new(dir.path().to_path_buf());

    cache.set("team-3-roster", json!("old"), -1);
    cache.set("team-3-roster", json!("new"), 3600);
    assert_eq!(cache.get("team-3-roster"), Some(json!("new")));
}

#[test]
fn test_disk_hit_survives_memory_eviction() {
    let dir = tempdir().unwrap();
    let cache = TtlCache::with_capacity(dir.path().to_path_buf(), 2);

    cache.set("scoreboard-week-1", json!(1), 3600);
    cache.set("scoreboard-week-2", json!(2), 3600);
    cache.set("scoreboard-week-3", json!(3), 3600);

    // week-1 was evicted from memory but is still served from disk
    assert_eq!(cache.memory_len(), 2);
    assert_eq!(cache.get("scoreboard-week-1"), Some(json!(1)));
}

#[test]
fn test_zero_capacity_is_clamped_not_a_panic() {
    let dir = tempdir().unwrap();
    let cache = TtlCache::with_capacity(dir.path().to_path_buf(), 0);

    cache.set("league-standings", json!(1), 3600);
    assert_eq!(cache.get("league-standings"), Some(json!(1)));
    assert_eq!(cache.memory_len(), 1);
}

#[test]
fn test_entries_persist_across_instances() {
    let dir = tempdir().unwrap();

    {
        let cache = TtlCache::new(dir.path().to_path_buf());
        cache.set("league-settings", json!({"name": "BrewZoo"}), 3600);
    }

    let cache = TtlCache::new(dir.path().to_path_buf());
    assert_eq!(
        cache.get("league-settings"),
        Some(json!({"name": "BrewZoo"}))
    );
}

#[test]
fn test_corrupt_entry_file_reads_as_absent() {
    let dir = tempdir().unwrap();
    let cache = TtlCache::new(dir.path().to_path_buf());

    std::fs::write(cache.entry_path("league-records"), "not json").unwrap();
    assert_eq!(cache.get("league-records"), None);
}
