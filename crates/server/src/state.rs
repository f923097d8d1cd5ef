use crate::metrics::Metrics;
use catalog::CatalogStore;
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

/// Shared application state: the catalog store, the metrics counters, and
/// a single write guard serializing catalog rewrites within this process.
#[derive(Clone)]
pub struct AppState {
    pub store: CatalogStore,
    pub metrics: Arc<Metrics>,
    write_guard: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(store: CatalogStore) -> Self {
        Self {
            store,
            metrics: Arc::new(Metrics::default()),
            write_guard: Arc::new(Mutex::new(())),
        }
    }

    /// Acquires the write guard. Hold the returned guard across the whole
    /// read-modify-write cycle of an append; reads do not take it.
    pub async fn lock_writes(&self) -> MutexGuard<'_, ()> {
        self.write_guard.lock().await
    }
}
