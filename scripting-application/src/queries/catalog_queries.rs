use scripting_domain::{CatalogItem, EquipSlot, Selector};

use crate::ops::catalog_cache;
use crate::{AppError, AppState};

/// Looks an item up by id or name, populating the catalog on first use.
/// `Ok(None)` is an ordinary miss; an unpopulatable catalog surfaces as an
/// error instead of masquerading as a miss.
pub async fn get_item(
    state: &AppState,
    selector: &Selector,
) -> Result<Option<CatalogItem>, AppError> {
    catalog_cache::ensure_populated(state).await?;
    let catalog = state.catalog.read().await;
    let found = catalog
        .as_ref()
        .and_then(|catalog| catalog.find(selector))
        .cloned();
    state.metrics.record_lookup(found.is_some());
    Ok(found)
}

/// Entries worn in `slot`, or the whole catalog when no slot is given.
/// An empty vec means "no such items"; an unavailable catalog is an error,
/// so the two cases stay distinguishable.
pub async fn items_by_slot(
    state: &AppState,
    slot: Option<EquipSlot>,
) -> Result<Vec<CatalogItem>, AppError> {
    catalog_cache::ensure_populated(state).await?;
    let catalog = state.catalog.read().await;
    Ok(catalog
        .as_ref()
        .map(|catalog| catalog.by_slot(slot).into_iter().cloned().collect())
        .unwrap_or_default())
}

/// `None` when no item matches the selector.
pub async fn is_color_customizable(
    state: &AppState,
    selector: &Selector,
) -> Result<Option<bool>, AppError> {
    Ok(get_item(state, selector)
        .await?
        .map(|item| item.is_color_customizable()))
}
