//! Cache Reaper Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::{broadcast, RwLock};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::cache::{CacheStore, StatsRecorder};

/// Spawns the reaper for one cache instance on `runtime`.
///
/// The task sleeps for `sweep_interval` between sweeps and takes the store's
/// write lock for each one. It exits when a shutdown signal arrives or when
/// every shutdown sender has been dropped.
///
/// # Returns
/// A JoinHandle for the spawned task, awaited on graceful shutdown and
/// aborted when the owning cache is dropped.
pub fn spawn_reaper_task(
    runtime: &Handle,
    store: Arc<RwLock<CacheStore>>,
    stats: Arc<StatsRecorder>,
    sweep_interval: Duration,
    mut shutdown: broadcast::Receiver<()>,
) -> JoinHandle<()> {
    runtime.spawn(async move {
        info!(?sweep_interval, "Starting cache reaper");

        loop {
            tokio::select! {
                // Fires on an explicit signal and on sender drop alike
                _ = shutdown.recv() => break,
                _ = tokio::time::sleep(sweep_interval) => {}
            }

            let (removed, remaining) = sweep(&store, &stats).await;

            if removed > 0 {
                info!(removed, remaining, "Cache reaper removed expired entries");
            } else {
                debug!(remaining, "Cache reaper found no expired entries");
            }
        }

        info!("Cache reaper stopped");
    })
}

/// Runs one sweep under the write lock.
///
/// Returns the number of entries removed and the number left.
pub(crate) async fn sweep(
    store: &RwLock<CacheStore>,
    stats: &StatsRecorder,
) -> (usize, usize) {
    let (removed, remaining) = {
        let mut guard = store.write().await;
        let removed = guard.reap_expired(Instant::now());
        (removed, guard.len())
    };
    stats.record_sweep(removed);
    (removed, remaining)
}
