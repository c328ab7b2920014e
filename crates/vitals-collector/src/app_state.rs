//! Shared application state for the collector.
//!
//! The aggregation store is constructed once in `main` (or a test) and passed
//! in here; nothing reaches it except through this state.

use std::sync::Arc;

use vitals_core::{MemStorage, Storage};

use crate::config::CollectorConfig;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: CollectorConfig,
    store: Arc<dyn Storage>,
}

impl AppState {
    /// Build application state with a fresh in-memory store.
    pub fn new(cfg: CollectorConfig) -> Self {
        Self::with_store(cfg, Arc::new(MemStorage::new()))
    }

    /// Build application state around an externally owned store.
    pub fn with_store(cfg: CollectorConfig, store: Arc<dyn Storage>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { cfg, store }),
        }
    }

    pub fn cfg(&self) -> &CollectorConfig {
        &self.inner.cfg
    }

    pub fn store(&self) -> &dyn Storage {
        self.inner.store.as_ref()
    }
}
