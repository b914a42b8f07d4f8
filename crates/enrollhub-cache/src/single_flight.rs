//! Per-key deduplicated one-shot loading.

use std::future::Future;
use std::hash::Hash;
use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::OnceCell;

/// Deduplicates "populate the cache entry for this ID from the backing
/// store" across concurrent first-time callers.
///
/// Each key moves through three states: unrequested (no cell), in flight
/// (cell initializing), and resolved (cell set). The first caller for a key
/// runs the load function; callers arriving while the load is in flight
/// await the same cell; callers arriving afterwards return immediately.
/// The load function executes at most once per key for the lifetime of the
/// process, whether or not it found anything.
///
/// The loader deliberately stores no result value: after `resolve` returns,
/// callers re-check their directory so the answer always reflects the
/// directory's actual state at the moment of the check. There is no timeout
/// and no cancellation — if a load never completes, all waiters for that
/// key wait with it.
#[derive(Debug, Default)]
pub struct SingleFlightLoader<K: Eq + Hash> {
    cells: DashMap<K, Arc<OnceCell<()>>>,
}

impl<K> SingleFlightLoader<K>
where
    K: Copy + Eq + Hash,
{
    /// Create an empty loader.
    pub fn new() -> Self {
        Self {
            cells: DashMap::new(),
        }
    }

    /// Run `load` for this key unless it already ran (or is running), and
    /// wait until the load for this key has fully completed.
    ///
    /// The map lock is held only while fetching the cell, never across the
    /// load itself, so loads for different keys proceed in parallel.
    pub async fn resolve<F, Fut>(&self, key: K, load: F)
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ()>,
    {
        let cell = self
            .cells
            .entry(key)
            .or_insert_with(|| Arc::new(OnceCell::new()))
            .clone();

        cell.get_or_init(load).await;
    }

    /// Whether a load for this key has already completed.
    pub fn is_resolved(&self, key: K) -> bool {
        self.cells
            .get(&key)
            .map(|cell| cell.initialized())
            .unwrap_or(false)
    }
}
