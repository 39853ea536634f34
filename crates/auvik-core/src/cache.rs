// ── Report cache ──
//
// Report generation costs dozens of API round-trips per tenant, so
// finished payloads are kept on disk for a while. One file per tenant
// domain under `cache/`, each wrapping the payload with its write time.

use std::time::Duration;

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CoreError;
use crate::store::JsonStore;

const CACHE_DIR: &str = "cache";

#[derive(Debug, Serialize, Deserialize)]
struct CacheEntry<T> {
    /// Unix seconds at write time.
    timestamp: i64,
    data: T,
}

/// TTL-checked cache of generated report payloads, keyed by tenant
/// domain.
#[derive(Debug, Clone)]
pub struct ReportCache {
    store: JsonStore,
    ttl: Duration,
}

impl ReportCache {
    pub fn new(store: JsonStore, ttl: Duration) -> Self {
        Self { store, ttl }
    }

    fn entry_path(key: &str) -> String {
        format!("{CACHE_DIR}/{key}_cache.json")
    }

    /// Returns the cached value when present, decodable, and younger than
    /// the TTL. Unreadable or stale entries are misses, never errors; the
    /// caller regenerates and overwrites.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let rel = Self::entry_path(key);
        let entry: CacheEntry<T> = match self.store.read(&rel) {
            Ok(Some(entry)) => entry,
            Ok(None) => return None,
            Err(err) => {
                debug!("ignoring unreadable cache entry {rel}: {err}");
                return None;
            }
        };
        let age = Utc::now().timestamp() - entry.timestamp;
        if age < self.ttl.as_secs().try_into().unwrap_or(i64::MAX) {
            Some(entry.data)
        } else {
            debug!("cache entry {rel} expired ({age}s old)");
            None
        }
    }

    /// Stores a value stamped with the current time.
    pub fn put<T: Serialize>(&self, key: &str, data: &T) -> Result<(), CoreError> {
        self.store.write(
            &Self::entry_path(key),
            &CacheEntry {
                timestamp: Utc::now().timestamp(),
                data,
            },
        )
    }

    /// Drops one tenant's entry. `Ok(false)` when there was none.
    pub fn clear(&self, key: &str) -> Result<bool, CoreError> {
        self.store.remove(&Self::entry_path(key))
    }

    /// Drops every entry. `Ok(false)` when the cache directory did not
    /// exist yet.
    pub fn clear_all(&self) -> Result<bool, CoreError> {
        self.store.remove_tree(CACHE_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cache_in(dir: &tempfile::TempDir, ttl: Duration) -> ReportCache {
        ReportCache::new(JsonStore::new(dir.path()), ttl)
    }

    #[test]
    fn fresh_entries_hit() {
        let dir = tempfile::tempdir().unwrap();
        let cache = cache_in(&dir, Duration::from_secs(3600));
        cache.put("acme", &vec![1, 2, 3]).unwrap();
        assert_eq!(cache.get::<Vec<u32>>("acme"), Some(vec![1, 2, 3]));
    }

    #[test]
    fn expired_entries_miss() {
        let dir = tempfile::tempdir().unwrap();
        let cache = cache_in(&dir, Duration::from_secs(0));
        cache.put("acme", &1_u32).unwrap();
        assert_eq!(cache.get::<u32>("acme"), None);
    }

    #[test]
    fn corrupt_entries_miss_instead_of_failing() {
        let dir = tempfile::tempdir().unwrap();
        let cache = cache_in(&dir, Duration::from_secs(3600));
        std::fs::create_dir_all(dir.path().join("cache")).unwrap();
        std::fs::write(dir.path().join("cache/acme_cache.json"), "{broken").unwrap();
        assert_eq!(cache.get::<u32>("acme"), None);
    }

    #[test]
    fn entries_are_isolated_per_key() {
        let dir = tempfile::tempdir().unwrap();
        let cache = cache_in(&dir, Duration::from_secs(3600));
        cache.put("acme", &1_u32).unwrap();
        assert_eq!(cache.get::<u32>("globex"), None);
        assert!(cache.clear("acme").unwrap());
        assert_eq!(cache.get::<u32>("acme"), None);
    }

    #[test]
    fn clear_all_wipes_the_directory() {
        let dir = tempfile::tempdir().unwrap();
        let cache = cache_in(&dir, Duration::from_secs(3600));
        cache.put("acme", &1_u32).unwrap();
        cache.put("globex", &2_u32).unwrap();
        assert!(cache.clear_all().unwrap());
        assert_eq!(cache.get::<u32>("acme"), None);
        assert!(!cache.clear_all().unwrap());
    }
}
