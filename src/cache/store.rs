//! Cache Store Module
//!
//! The unsynchronized entry map underneath [`Cache`](super::Cache). All
//! locking happens one level up; every method here assumes exclusive or
//! shared access has already been acquired.

use std::collections::HashMap;
use std::time::Duration;

use bytes::Bytes;
use tokio::time::Instant;

use crate::cache::CacheEntry;

// == Cache Store ==
/// Key to payload map with a fixed maximum entry age.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Maximum entry age, immutable for the store's lifetime
    ttl: Duration,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store whose entries expire after `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Put ==
    /// Stores a payload, fully replacing any previous entry and resetting its age.
    pub fn put(&mut self, key: String, payload: Bytes) {
        self.put_at(key, payload, Instant::now());
    }

    /// Stores a payload stamped with `now`.
    pub fn put_at(&mut self, key: String, payload: Bytes, now: Instant) {
        self.entries.insert(key, CacheEntry::created_at(payload, now));
    }

    // == Get ==
    /// Returns the payload for `key` regardless of its age.
    pub fn get(&self, key: &str) -> Option<Bytes> {
        self.entries.get(key).map(|entry| entry.payload.clone())
    }

    /// Returns the payload for `key` only if it is no older than the TTL at `now`.
    pub fn get_fresh(&self, key: &str, now: Instant) -> Option<Bytes> {
        self.entries
            .get(key)
            .filter(|entry| !entry.is_expired(self.ttl, now))
            .map(|entry| entry.payload.clone())
    }

    // == Reap Expired ==
    /// Removes every entry whose age exceeds the TTL as of `now`.
    ///
    /// Returns the number of entries removed.
    pub fn reap_expired(&mut self, now: Instant) -> usize {
        let before = self.entries.len();
        let ttl = self.ttl;
        self.entries.retain(|_, entry| !entry.is_expired(ttl, now));
        before - self.entries.len()
    }

    // == Length ==
    /// Returns the current number of entries in the store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_secs(5);

    fn payload(s: &'static str) -> Bytes {
        Bytes::from_static(s.as_bytes())
    }

    #[test]
    fn test_store_new() {
        let store = CacheStore::new(TTL);
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
        assert_eq!(store.ttl(), TTL);
    }

    #[test]
    fn test_store_put_and_get() {
        let mut store = CacheStore::new(TTL);

        store.put("key1".to_string(), payload("value1"));

        assert_eq!(store.get("key1"), Some(payload("value1")));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_get_nonexistent() {
        let store = CacheStore::new(TTL);
        assert!(store.get("nonexistent").is_none());
    }

    #[test]
    fn test_store_empty_key_and_payload() {
        let mut store = CacheStore::new(TTL);

        store.put(String::new(), Bytes::new());

        assert_eq!(store.get(""), Some(Bytes::new()));
    }

    #[test]
    fn test_store_overwrite_resets_age() {
        let mut store = CacheStore::new(TTL);
        let start = Instant::now();

        store.put_at("key1".to_string(), payload("value1"), start);
        store.put_at("key1".to_string(), payload("value2"), start + Duration::from_secs(4));

        assert_eq!(store.get("key1"), Some(payload("value2")));
        assert_eq!(store.len(), 1);

        // First write would have expired here; the second has not
        let removed = store.reap_expired(start + Duration::from_secs(6));
        assert_eq!(removed, 0);
        assert_eq!(store.get("key1"), Some(payload("value2")));
    }

    #[test]
    fn test_store_reap_expired() {
        let mut store = CacheStore::new(TTL);
        let start = Instant::now();

        store.put_at("old".to_string(), payload("a"), start);
        store.put_at("new".to_string(), payload("b"), start + Duration::from_secs(3));

        let removed = store.reap_expired(start + Duration::from_secs(6));
        assert_eq!(removed, 1);
        assert_eq!(store.len(), 1);
        assert!(store.get("old").is_none());
        assert!(store.get("new").is_some());
    }

    #[test]
    fn test_store_reap_empty_is_noop() {
        let mut store = CacheStore::new(TTL);
        assert_eq!(store.reap_expired(Instant::now() + TTL * 10), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_get_ignores_age() {
        let mut store = CacheStore::new(TTL);
        let start = Instant::now();

        store.put_at("key".to_string(), payload("stale"), start);

        assert_eq!(store.get("key"), Some(payload("stale")));
        assert!(store.get_fresh("key", start + TTL * 2).is_none());
    }

    #[test]
    fn test_store_get_fresh_within_ttl() {
        let mut store = CacheStore::new(TTL);
        let start = Instant::now();

        store.put_at("key".to_string(), payload("fresh"), start);

        assert_eq!(store.get_fresh("key", start + TTL / 2), Some(payload("fresh")));
    }
}
