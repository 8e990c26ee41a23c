use std::sync::Arc;

use anyhow::Result;

use scripting_application::AppState;
use scripting_domain::ports::RosterProvider;
use scripting_infrastructure::{AppConfig, HttpCatalogFetcher};

/// Wires configuration and the HTTP fetcher into a ready `AppState`. The
/// roster comes from the host; the engine never owns the scene.
pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    pub async fn new(roster: Arc<dyn RosterProvider>) -> Result<Self> {
        let config = AppConfig::load().await?;
        let runtime_config = config.to_runtime_config();

        let fetcher = Arc::new(HttpCatalogFetcher::new(&runtime_config)?);
        let state = AppState::new(runtime_config, fetcher, roster);

        Ok(Self { state })
    }
}
