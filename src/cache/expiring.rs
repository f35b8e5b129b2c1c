//! Expiring Cache Module
//!
//! Thread-safe handle over a [`CacheStore`] that owns its reaper task.

use std::sync::Arc;

use bytes::Bytes;
use tokio::runtime::Handle;
use tokio::sync::{broadcast, RwLock};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, warn};

use crate::cache::{CacheStats, CacheStore, StatsRecorder};
use crate::config::CacheConfig;
use crate::error::{PokedexError, Result};
use crate::tasks::{spawn_reaper_task, sweep};

// == Cache ==
/// Age-bounded cache of opaque payloads with self-driven expiration.
///
/// One coarse lock guards the whole entry map: `put` and reaper sweeps take
/// it exclusively, `get` takes it shared. Each cache owns exactly one reaper
/// task, stopped by [`Cache::shutdown`] or aborted on drop.
///
/// Reads do not check entry age unless strict reads are enabled, so a payload
/// may be served for up to one sweep interval past its TTL.
///
/// # Example
/// ```ignore
/// let cache = Cache::with_ttl(Duration::from_secs(5))?;
/// cache.put("https://pokeapi.co/api/v2/pokemon/pikachu", body).await;
/// let hit = cache.get("https://pokeapi.co/api/v2/pokemon/pikachu").await;
/// cache.shutdown().await;
/// ```
#[derive(Debug)]
pub struct Cache {
    store: Arc<RwLock<CacheStore>>,
    stats: Arc<StatsRecorder>,
    config: CacheConfig,
    shutdown_tx: broadcast::Sender<()>,
    reaper: Option<JoinHandle<()>>,
}

impl Cache {
    // == Constructor ==
    /// Validates `config` and starts the reaper on the current Tokio runtime.
    ///
    /// # Errors
    /// - `InvalidConfig` for a zero TTL or a sweep interval outside `(0, ttl]`
    /// - `NoRuntime` when called outside a Tokio runtime
    pub fn new(config: CacheConfig) -> Result<Self> {
        config.validate()?;
        let runtime = Handle::try_current().map_err(|_| PokedexError::NoRuntime)?;

        let store = Arc::new(RwLock::new(CacheStore::new(config.ttl)));
        let stats = Arc::new(StatsRecorder::new());
        let (shutdown_tx, shutdown_rx) = broadcast::channel(1);

        let reaper = spawn_reaper_task(
            &runtime,
            Arc::clone(&store),
            Arc::clone(&stats),
            config.effective_sweep_interval(),
            shutdown_rx,
        );

        debug!(ttl = ?config.ttl, strict_reads = config.strict_reads, "Cache created");

        Ok(Self {
            store,
            stats,
            config,
            shutdown_tx,
            reaper: Some(reaper),
        })
    }

    /// Shorthand for a cache whose TTL is also its sweep interval.
    pub fn with_ttl(ttl: std::time::Duration) -> Result<Self> {
        Self::new(CacheConfig::new(ttl))
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    // == Put ==
    /// Inserts or replaces the payload for `key`, resetting its age.
    ///
    /// Visible to every `get` issued after this returns.
    pub async fn put(&self, key: impl Into<String>, payload: impl Into<Bytes>) {
        let mut store = self.store.write().await;
        store.put(key.into(), payload.into());
    }

    // == Get ==
    /// Returns the payload stored under `key`, if any.
    ///
    /// A miss is an expected outcome, not an error.
    pub async fn get(&self, key: &str) -> Option<Bytes> {
        let payload = {
            let store = self.store.read().await;
            if self.config.strict_reads {
                store.get_fresh(key, Instant::now())
            } else {
                store.get(key)
            }
        };

        match payload {
            Some(_) => self.stats.record_hit(),
            None => self.stats.record_miss(),
        }
        payload
    }

    // == Reap Now ==
    /// Runs one sweep immediately, outside the reaper schedule.
    ///
    /// Returns the number of entries removed.
    pub async fn reap_now(&self) -> usize {
        sweep(&self.store, &self.stats).await.0
    }

    // == Length ==
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }

    // == Stats ==
    /// Returns a snapshot of the cache's counters.
    pub async fn stats(&self) -> CacheStats {
        let total_entries = self.len().await;
        self.stats.snapshot(total_entries)
    }

    // == Shutdown ==
    /// Signals the reaper and waits for it to exit.
    pub async fn shutdown(mut self) {
        let _ = self.shutdown_tx.send(());

        if let Some(reaper) = self.reaper.take() {
            if let Err(err) = reaper.await {
                warn!(error = %err, "Cache reaper ended abnormally");
            }
        }
    }
}

impl Drop for Cache {
    fn drop(&mut self) {
        if let Some(reaper) = self.reaper.take() {
            reaper.abort();
        }
    }
}
