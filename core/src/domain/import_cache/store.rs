use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};

use crate::domain::{common::generate_random_string, import_cache::entities::PendingImport};

pub const DEFAULT_IMPORT_TTL_MINUTES: i64 = 30;

const TOKEN_LENGTH: usize = 32;

struct StoredImport {
    import: PendingImport,
    expires_at: DateTime<Utc>,
}

/// Process-wide store for pending imports. Entries expire after a fixed TTL
/// and are swept on every access; commit consumes its token so a preview can
/// only be committed once.
pub struct ImportCache {
    ttl: Duration,
    entries: Mutex<HashMap<String, StoredImport>>,
}

impl ImportCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_default_ttl() -> Self {
        Self::new(Duration::minutes(DEFAULT_IMPORT_TTL_MINUTES))
    }

    pub fn put(&self, import: PendingImport) -> String {
        self.put_at(import, Utc::now())
    }

    pub fn get(&self, token: &str) -> Option<PendingImport> {
        self.get_at(token, Utc::now())
    }

    /// One-time take: the entry is removed whether or not the caller succeeds
    /// afterwards.
    pub fn consume(&self, token: &str) -> Option<PendingImport> {
        self.consume_at(token, Utc::now())
    }

    /// Drops expired entries, returning how many were evicted.
    pub fn sweep(&self) -> usize {
        self.sweep_at(Utc::now())
    }

    fn put_at(&self, import: PendingImport, now: DateTime<Utc>) -> String {
        let token = generate_random_string(TOKEN_LENGTH);
        let mut entries = self.entries.lock().expect("import cache poisoned");
        Self::evict_expired(&mut entries, now);
        entries.insert(
            token.clone(),
            StoredImport {
                import,
                expires_at: now + self.ttl,
            },
        );
        token
    }

    fn get_at(&self, token: &str, now: DateTime<Utc>) -> Option<PendingImport> {
        let mut entries = self.entries.lock().expect("import cache poisoned");
        Self::evict_expired(&mut entries, now);
        entries.get(token).map(|stored| stored.import.clone())
    }

    fn consume_at(&self, token: &str, now: DateTime<Utc>) -> Option<PendingImport> {
        let mut entries = self.entries.lock().expect("import cache poisoned");
        Self::evict_expired(&mut entries, now);
        entries.remove(token).map(|stored| stored.import)
    }

    fn sweep_at(&self, now: DateTime<Utc>) -> usize {
        let mut entries = self.entries.lock().expect("import cache poisoned");
        let before = entries.len();
        Self::evict_expired(&mut entries, now);
        before - entries.len()
    }

    fn evict_expired(entries: &mut HashMap<String, StoredImport>, now: DateTime<Utc>) {
        entries.retain(|_, stored| stored.expires_at > now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_import() -> PendingImport {
        PendingImport {
            filename: "checklist.xlsx".to_string(),
            columns: vec!["Lokasi".to_string(), "Area".to_string()],
            rows: vec![],
            schema: serde_json::json!({"fields": []}),
        }
    }

    #[test]
    fn put_then_get_round_trips() {
        let cache = ImportCache::with_default_ttl();
        let token = cache.put(sample_import());

        let found = cache.get(&token).unwrap();
        assert_eq!(found.filename, "checklist.xlsx");
        // get does not consume
        assert!(cache.get(&token).is_some());
    }

    #[test]
    fn consume_is_one_time() {
        let cache = ImportCache::with_default_ttl();
        let token = cache.put(sample_import());

        assert!(cache.consume(&token).is_some());
        assert!(cache.consume(&token).is_none());
        assert!(cache.get(&token).is_none());
    }

    #[test]
    fn entries_expire_after_ttl() {
        let cache = ImportCache::new(Duration::minutes(30));
        let t0 = Utc::now();
        let token = cache.put_at(sample_import(), t0);

        assert!(cache.get_at(&token, t0 + Duration::minutes(29)).is_some());
        assert!(cache.get_at(&token, t0 + Duration::minutes(31)).is_none());
    }

    #[test]
    fn sweep_reports_evictions() {
        let cache = ImportCache::new(Duration::minutes(30));
        let t0 = Utc::now();
        let live = cache.put_at(sample_import(), t0 + Duration::minutes(20));
        cache.put_at(sample_import(), t0);

        assert_eq!(cache.sweep_at(t0 + Duration::minutes(31)), 1);
        assert!(cache.get_at(&live, t0 + Duration::minutes(31)).is_some());
    }

    #[test]
    fn unknown_token_misses() {
        let cache = ImportCache::with_default_ttl();
        assert!(cache.get("nope").is_none());
        assert!(cache.consume("nope").is_none());
    }
}
