//! TTL response cache: in-memory LRU layer over file system persistence
//!
//! Every data-fetching command goes through this cache to avoid redundant
//! Yahoo API calls. Entries are JSON values tagged with an absolute expiry
//! timestamp; expiry is lazy, checked on read, and an expired entry is
//! removed as a side effect of the read that finds it stale.
//!
//! TTL policy lives entirely in the callers (settings 7 days, standings and
//! matchups 6 hours, finalized past-week scoreboards 7 days, ...). The cache
//! itself only honors the expiry it was handed; a non-positive TTL produces
//! an entry that is already expired on its next read.

use lru::LruCache;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{
    fs,
    io::{Read, Write},
    num::NonZeroUsize,
    path::{Path, PathBuf},
    sync::Mutex,
    time::{SystemTime, UNIX_EPOCH},
};

#[cfg(test)]
mod tests;

/// Entries kept in the memory layer before LRU eviction kicks in. Evicted
/// entries are still served from disk.
const DEFAULT_MEMORY_CAPACITY: usize = 256;

/// Default cache root: `~/.cache/puckboard`.
pub fn default_cache_root() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("puckboard")
}

/// Current time as unix milliseconds.
fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

/// Try to read a file into a String
fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write a string to file, creating parent directories as needed
fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}

/// A cached value plus its absolute expiry (unix milliseconds).
///
/// This is also the on-disk envelope: `{"value": ..., "expiry": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    pub value: Value,
    pub expiry: i64,
}

impl CacheEntry {
    fn is_fresh(&self, now: i64) -> bool {
        now < self.expiry
    }
}

/// TTL key/value cache with an LRU memory layer and one JSON file per key.
///
/// The memory layer is a bounded accelerator only: expiry is embedded in the
/// entry and checked on every read from either layer, so eviction or a
/// process restart never changes what a reader observes. The mutex makes
/// `get`/`set` safe under the multi-threaded runtime; two concurrent misses
/// for the same key may both fetch upstream, which is redundant work, not
/// corruption.
pub struct TtlCache {
    memory: Mutex<LruCache<String, CacheEntry>>,
    root: PathBuf,
}

impl TtlCache {
    /// Create a cache rooted at `root` with the default memory capacity.
    pub fn new(root: PathBuf) -> Self {
        Self::with_capacity(root, DEFAULT_MEMORY_CAPACITY)
    }

    /// Create a cache with an explicit memory-layer capacity. A capacity of
    /// zero is clamped to one entry.
    pub fn with_capacity(root: PathBuf, memory_capacity: usize) -> Self {
        Self {
            memory: Mutex::new(LruCache::new(
                NonZeroUsize::new(memory_capacity).unwrap_or(NonZeroUsize::MIN),
            )),
            root,
        }
    }

    /// Path of the entry file for `key`: `{root}/{key}.json`.
    fn entry_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    /// Look up `key`. Returns the value only while `now < expiry`; an entry
    /// found expired is removed (memory and file) and `None` is returned.
    /// A missing or expired key is a normal outcome, never an error.
    pub fn get(&self, key: &str) -> Option<Value> {
        let now = now_millis();

        {
            let mut memory = self.memory.lock().unwrap();
            if let Some(entry) = memory.get(key) {
                if entry.is_fresh(now) {
                    return Some(entry.value.clone());
                }
                memory.pop(key);
            }
        }

        let path = self.entry_path(key);
        let entry: CacheEntry = serde_json::from_str(&try_read_to_string(&path)?).ok()?;
        if !entry.is_fresh(now) {
            let _ = fs::remove_file(&path);
            return None;
        }

        // Promote disk hits to the memory layer
        self.memory
            .lock()
            .unwrap()
            .put(key.to_string(), entry.clone());
        Some(entry.value)
    }

    /// Store `value` under `key`, unconditionally replacing any existing
    /// entry, with `expiry = now + ttl_seconds * 1000`. `ttl_seconds` is
    /// signed and deliberately unvalidated: callers are trusted, and a
    /// non-positive TTL means expired-on-next-read.
    pub fn set(&self, key: &str, value: Value, ttl_seconds: i64) {
        let entry = CacheEntry {
            value,
            expiry: now_millis() + ttl_seconds * 1000,
        };

        // Best-effort persistence; the cache is an accelerator, not a store
        // of record, so a failed write only costs a refetch.
        if let Ok(contents) = serde_json::to_string(&entry) {
            let _ = write_string(&self.entry_path(key), &contents);
        }

        self.memory.lock().unwrap().put(key.to_string(), entry);
    }

    /// Number of entries currently held in the memory layer.
    pub fn memory_len(&self) -> usize {
        self.memory.lock().unwrap().len()
    }
}
