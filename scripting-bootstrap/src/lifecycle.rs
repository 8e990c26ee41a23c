use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use scripting_application::AppState;
use scripting_domain::ports::RosterProvider;

use crate::context::AppContext;

/// Builds the engine state on the caller's runtime, for async hosts.
pub async fn init(roster: Arc<dyn RosterProvider>) -> Result<AppState> {
    let context = AppContext::new(roster).await?;
    Ok(context.state)
}

/// Engine embedded in a host without an async runtime of its own. The
/// handle owns a private multi-thread runtime; script calls go through
/// `block_on`.
pub struct EngineHandle {
    runtime: tokio::runtime::Runtime,
    state: AppState,
}

impl EngineHandle {
    pub fn state(&self) -> AppState {
        self.state.clone()
    }

    /// Drives a scripting future to completion from a synchronous caller.
    pub fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    /// Tears the runtime down without waiting for background work.
    pub fn stop(self) {
        self.runtime.shutdown_background();
    }
}

pub fn start_embedded(roster: Arc<dyn RosterProvider>) -> Result<EngineHandle> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .thread_name("marionette-rt")
        .enable_all()
        .build()?;

    let state = runtime.block_on(AppContext::new(roster))?.state;
    info!("scripting engine ready");

    Ok(EngineHandle { runtime, state })
}
