// ── Read-through snapshot cache ──
//
// The localStorage analog: a process-wide keyed store backed by one JSON
// file per key in the platform cache dir. Used only for "paint
// immediately, then reconcile" -- never as the source of truth. Corrupt
// or missing entries read as absent; write failures are swallowed.

use std::path::PathBuf;
use std::sync::Arc;

use dashmap::DashMap;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Fixed key for the persisted session payload.
pub const SESSION_KEY: &str = "user";

/// Per-entity keyed snapshot store.
///
/// `get` tolerates and discards anything it can't deserialize; `set` is
/// fire-and-forget. Single-writer by construction (one UI event loop),
/// so last-write-wins file replacement is safe.
pub struct SnapshotCache {
    dir: Option<PathBuf>,
    entries: DashMap<String, String>,
}

impl SnapshotCache {
    /// A cache persisted under `dir`. The directory is created lazily on
    /// first write; an unusable directory degrades to memory-only.
    pub fn new(dir: PathBuf) -> Arc<Self> {
        Arc::new(Self {
            dir: Some(dir),
            entries: DashMap::new(),
        })
    }

    /// A memory-only cache (tests, `--no-cache` runs).
    pub fn ephemeral() -> Arc<Self> {
        Arc::new(Self {
            dir: None,
            entries: DashMap::new(),
        })
    }

    /// Fetch and deserialize a snapshot, or `None` for missing/corrupt.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.entries.get(key) {
            Some(entry) => entry.value().clone(),
            None => self.read_file(key)?,
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                debug!("discarding corrupt cache entry '{key}': {e}");
                None
            }
        }
    }

    /// Serialize and store a snapshot. Failures are logged and ignored.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                debug!("cache serialization failed for '{key}': {e}");
                return;
            }
        };
        self.entries.insert(key.to_owned(), raw.clone());
        self.write_file(key, &raw);
    }

    /// Drop a key from memory and disk.
    pub fn remove(&self, key: &str) {
        self.entries.remove(key);
        if let Some(path) = self.file_path(key) {
            let _ = std::fs::remove_file(path);
        }
    }

    // ── File mirror ──────────────────────────────────────────────────

    fn file_path(&self, key: &str) -> Option<PathBuf> {
        // Keys are fixed identifiers like "cities_cache"; no escaping needed.
        self.dir.as_ref().map(|d| d.join(format!("{key}.json")))
    }

    fn read_file(&self, key: &str) -> Option<String> {
        let raw = std::fs::read_to_string(self.file_path(key)?).ok()?;
        self.entries.insert(key.to_owned(), raw.clone());
        Some(raw)
    }

    fn write_file(&self, key: &str, raw: &str) {
        let Some(path) = self.file_path(key) else {
            return;
        };
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                debug!("cache dir creation failed: {e}");
                return;
            }
        }
        if let Err(e) = std::fs::write(&path, raw) {
            debug!("cache write failed for '{key}': {e}");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use geocat_api::City;
    use serde_json::json;

    #[test]
    fn get_returns_none_for_missing_key() {
        let cache = SnapshotCache::ephemeral();
        assert!(cache.get::<Vec<City>>("cities_cache").is_none());
    }

    #[test]
    fn set_then_get_round_trips() {
        let cache = SnapshotCache::ephemeral();
        let cities: Vec<City> = serde_json::from_value(json!([
            { "_id": "x1", "name": "Paris", "country": { "_id": "c2", "name": "France", "code": "FR" } }
        ]))
        .unwrap();

        cache.set("cities_cache", &cities);
        let painted: Vec<City> = cache.get("cities_cache").unwrap();
        assert_eq!(painted, cities);
    }

    #[test]
    fn corrupt_entry_reads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("cities_cache.json"), "{ not json ]").unwrap();

        let cache = SnapshotCache::new(dir.path().to_path_buf());
        assert!(cache.get::<Vec<City>>("cities_cache").is_none());
    }

    #[test]
    fn wrong_shape_reads_as_absent() {
        let cache = SnapshotCache::ephemeral();
        cache.set("cities_cache", &json!({ "unexpected": "shape" }));
        assert!(cache.get::<Vec<City>>("cities_cache").is_none());
    }

    #[test]
    fn persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let cities: Vec<City> =
            serde_json::from_value(json!([{ "_id": "x2", "name": "Lyon" }])).unwrap();

        SnapshotCache::new(dir.path().to_path_buf()).set("cities_cache", &cities);

        let reopened = SnapshotCache::new(dir.path().to_path_buf());
        let painted: Vec<City> = reopened.get("cities_cache").unwrap();
        assert_eq!(painted[0].name, "Lyon");
    }

    #[test]
    fn remove_clears_memory_and_disk() {
        let dir = tempfile::tempdir().unwrap();
        let cache = SnapshotCache::new(dir.path().to_path_buf());
        cache.set(SESSION_KEY, &json!({ "email": "a@b.c" }));
        cache.remove(SESSION_KEY);
        assert!(cache.get::<serde_json::Value>(SESSION_KEY).is_none());
        assert!(!dir.path().join("user.json").exists());
    }
}
