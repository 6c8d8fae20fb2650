//! Dataset snapshot store.
//!
//! Each upload or fetch produces one immutable snapshot (bars plus the
//! signals derived from them), published under an explicit dataset id.
//! Publishing swaps the whole `Arc` under the lock, so a reader either
//! sees the previous complete snapshot or the new one, never a half-written
//! mix. There is no implicit "latest" dataset.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::models::{PriceBar, Signal};

#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSnapshot {
    pub bars: Vec<PriceBar>,
    pub signals: Vec<Signal>,
}

#[derive(Debug, Default)]
pub struct DatasetStore {
    inner: RwLock<HashMap<String, Arc<DatasetSnapshot>>>,
}

impl DatasetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically replace the snapshot stored under `id`, returning the
    /// published handle.
    pub fn publish(&self, id: impl Into<String>, snapshot: DatasetSnapshot) -> Arc<DatasetSnapshot> {
        let snapshot = Arc::new(snapshot);
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        inner.insert(id.into(), Arc::clone(&snapshot));
        snapshot
    }

    /// Handle to the current snapshot for `id`. The handle stays valid and
    /// unchanged even if the dataset is republished or removed afterwards.
    pub fn get(&self, id: &str) -> Option<Arc<DatasetSnapshot>> {
        let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
        inner.get(id).cloned()
    }

    pub fn remove(&self, id: &str) -> Option<Arc<DatasetSnapshot>> {
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        inner.remove(id)
    }

    pub fn dataset_ids(&self) -> Vec<String> {
        let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
        inner.keys().cloned().collect()
    }
}
