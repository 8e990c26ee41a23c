use tracing::{info, warn};

use scripting_domain::services::Catalog;
use scripting_domain::ResourceKind;

use crate::{AppError, AppState};

/// Populates the item catalog on first use.
///
/// Concurrent first accesses fetch at most once: callers race for the
/// populate gate, the winner fetches and stores the whole list, losers
/// re-check and reuse it. A failed attempt leaves the state empty, so the
/// next access retries; this is the only retry behavior in the engine.
pub async fn ensure_populated(state: &AppState) -> Result<(), AppError> {
    if state.catalog.read().await.is_some() {
        return Ok(());
    }

    let _gate = state.populate_gate.lock().await;
    if state.catalog.read().await.is_some() {
        return Ok(());
    }

    state.metrics.record_fetch();
    let payload = match state.fetcher.fetch(ResourceKind::Items).await {
        Ok(payload) => payload,
        Err(err) => {
            state.metrics.record_fetch_error();
            warn!("catalog fetch failed: {}", err);
            return Err(err.into());
        }
    };

    let catalog = match Catalog::from_json(&payload) {
        Ok(catalog) => catalog,
        Err(err) => {
            state.metrics.record_fetch_error();
            warn!("catalog payload rejected: {}", err);
            return Err(err.into());
        }
    };

    info!("item catalog populated: {} entries", catalog.len());
    *state.catalog.write().await = Some(catalog);
    Ok(())
}
