use tracing::debug;

use scripting_domain::ports::EquipTarget;
use scripting_domain::utils::normalize_hex_channel;
use scripting_domain::{CatalogItem, ColorChannels, EquipSlot, Selector};

use crate::ops::catalog_cache;
use crate::{AppError, AppState};

/// Recolors a catalog entry in place and returns the new value.
///
/// The entry is shared state: every later lookup of the same item observes
/// the new channels, and concurrent recolors are last-writer-wins. A
/// non-customizable item is rejected before anything is touched.
pub async fn apply_custom_color(
    state: &AppState,
    selector: &Selector,
    channels: ColorChannels,
) -> Result<CatalogItem, AppError> {
    let channels = normalize_channels(channels)?;
    catalog_cache::ensure_populated(state).await?;

    let mut catalog = state.catalog.write().await;
    let item = catalog
        .as_mut()
        .and_then(|catalog| catalog.find_mut(selector))
        .ok_or_else(|| AppError::ItemNotFound(selector.to_string()))?;
    if !item.is_color_customizable() {
        return Err(AppError::NotCustomizable(item.name.clone()));
    }

    debug!("recolor: {}", item.name);
    item.recolor(channels);
    Ok(item.clone())
}

/// Recolors whatever the target currently wears in `slot`, pushes the
/// updated entry back onto the target, and refreshes its assets.
pub async fn recolor_equipped(
    state: &AppState,
    target: &mut dyn EquipTarget,
    slot: EquipSlot,
    channels: ColorChannels,
) -> Result<CatalogItem, AppError> {
    let worn_id = target
        .equips()
        .get(&slot)
        .map(|item| item.id)
        .ok_or(AppError::SlotEmpty(slot))?;

    let item = apply_custom_color(state, &Selector::Id(worn_id), channels).await?;
    target.equips_mut().insert(slot, item.clone());
    target.refresh_assets();
    Ok(item)
}

fn normalize_channels(channels: ColorChannels) -> Result<ColorChannels, AppError> {
    Ok(ColorChannels {
        r: normalize_channel(channels.r)?,
        g: normalize_channel(channels.g)?,
        b: normalize_channel(channels.b)?,
    })
}

fn normalize_channel(channel: Option<String>) -> Result<Option<String>, AppError> {
    match channel {
        Some(raw) => normalize_hex_channel(&raw)
            .map(Some)
            .ok_or(AppError::BadChannel(raw)),
        None => Ok(None),
    }
}
