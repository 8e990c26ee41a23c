use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use scripting_domain::ports::{CatalogFetcher, RosterProvider};
use scripting_domain::services::Catalog;
use scripting_domain::RuntimeConfig;

use crate::Metrics;

/// Shared engine state. One instance per embedding host, cloned freely;
/// the catalog inside is the process-wide cache.
#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub fetcher: Arc<dyn CatalogFetcher>,
    pub roster: Arc<dyn RosterProvider>,
    /// `None` until the first successful fetch. Population is whole-or-none.
    pub catalog: Arc<RwLock<Option<Catalog>>>,
    /// Serializes first-time population so concurrent first accesses fetch
    /// at most once.
    pub populate_gate: Arc<Mutex<()>>,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    pub fn new(
        config: RuntimeConfig,
        fetcher: Arc<dyn CatalogFetcher>,
        roster: Arc<dyn RosterProvider>,
    ) -> Self {
        Self {
            config,
            fetcher,
            roster,
            catalog: Arc::new(RwLock::new(None)),
            populate_gate: Arc::new(Mutex::new(())),
            metrics: Arc::new(Metrics::default()),
        }
    }
}
