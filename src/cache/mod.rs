//! Cache Module
//!
//! Provides an in-memory, age-bounded cache of opaque payloads keyed by
//! request identity, with a background reaper per instance.

mod entry;
mod expiring;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use expiring::Cache;
pub use stats::{CacheStats, StatsRecorder};
pub use store::CacheStore;
