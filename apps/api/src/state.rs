use std::sync::Arc;

use crate::config::Config;
use crate::resume::memory::MemoryResumeStore;
use crate::resume::store::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable store. Postgres when `DATABASE_URL` is set, in-memory otherwise.
    pub store: Arc<dyn ResumeStore>,
    pub config: Config,
}

impl AppState {
    pub fn new(store: Arc<dyn ResumeStore>, config: Config) -> Self {
        Self { store, config }
    }

    /// State backed by a fresh in-memory store.
    pub fn in_memory(config: Config) -> Self {
        Self::new(Arc::new(MemoryResumeStore::new()), config)
    }
}
