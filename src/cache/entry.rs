//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with age tracking.

use std::time::Duration;

use bytes::Bytes;
use tokio::time::Instant;

// == Cache Entry ==
/// A single cached payload and the instant it was stored.
///
/// The payload is immutable once stored; readers receive a shared view.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload
    pub payload: Bytes,
    /// When the payload was stored (monotonic clock)
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current instant.
    pub fn new(payload: Bytes) -> Self {
        Self::created_at(payload, Instant::now())
    }

    /// Creates a new entry stamped with `created_at`.
    pub fn created_at(payload: Bytes, created_at: Instant) -> Self {
        Self {
            payload,
            created_at,
        }
    }

    // == Age ==
    /// Time the entry has been held as of `now`.
    ///
    /// Saturates to zero if `now` precedes the creation instant.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Expired ==
    /// Checks if the entry is older than `ttl` as of `now`.
    ///
    /// Boundary condition: an entry whose age equals `ttl` exactly is still
    /// live; it expires only once its age strictly exceeds `ttl`.
    pub fn is_expired(&self, ttl: Duration, now: Instant) -> bool {
        self.age(now) > ttl
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new(Bytes::from_static(b"test_value"));

        assert_eq!(&entry.payload[..], b"test_value");
        assert!(!entry.is_expired(Duration::from_secs(60), Instant::now()));
    }

    #[test]
    fn test_entry_empty_payload() {
        let entry = CacheEntry::new(Bytes::new());
        assert!(entry.payload.is_empty());
    }

    #[test]
    fn test_entry_age() {
        let start = Instant::now();
        let entry = CacheEntry::created_at(Bytes::from_static(b"v"), start);

        assert_eq!(entry.age(start + Duration::from_millis(1500)), Duration::from_millis(1500));
    }

    #[test]
    fn test_entry_age_saturates() {
        let start = Instant::now();
        let entry = CacheEntry::created_at(Bytes::from_static(b"v"), start + Duration::from_secs(1));

        assert_eq!(entry.age(start), Duration::ZERO);
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let start = Instant::now();
        let ttl = Duration::from_secs(5);
        let entry = CacheEntry::created_at(Bytes::from_static(b"v"), start);

        assert!(!entry.is_expired(ttl, start + ttl), "Entry at exactly ttl is still live");
        assert!(entry.is_expired(ttl, start + ttl + Duration::from_millis(1)));
    }
}
