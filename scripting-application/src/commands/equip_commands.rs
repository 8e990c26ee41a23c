use serde::{Deserialize, Serialize};
use tracing::debug;

use scripting_domain::ports::EquipTarget;
use scripting_domain::Selector;

use crate::queries::catalog_queries;
use crate::{AppError, AppState};

/// What a batched equip actually did: ids now worn, selectors that matched
/// nothing.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipOutcome {
    pub equipped: Vec<u32>,
    pub skipped: Vec<String>,
}

pub async fn equip_item(
    state: &AppState,
    target: &mut dyn EquipTarget,
    selector: Selector,
) -> Result<EquipOutcome, AppError> {
    equip_items(state, target, vec![selector]).await
}

/// Resolves each selector against the catalog and writes the matching item
/// into the target's slot; a later selector for the same slot overwrites an
/// earlier one. Unresolved selectors are skipped. The host refresh fires
/// once for the whole batch, and only when something resolved.
pub async fn equip_items(
    state: &AppState,
    target: &mut dyn EquipTarget,
    selectors: Vec<Selector>,
) -> Result<EquipOutcome, AppError> {
    let mut outcome = EquipOutcome::default();
    for selector in selectors {
        match catalog_queries::get_item(state, &selector).await? {
            Some(item) => {
                debug!("equip: {} -> {}", item.name, item.slot.as_str());
                outcome.equipped.push(item.id);
                target.equips_mut().insert(item.slot, item);
            }
            None => outcome.skipped.push(selector.to_string()),
        }
    }

    if !outcome.equipped.is_empty() {
        state.metrics.record_equips(outcome.equipped.len());
        target.refresh_assets();
    }
    Ok(outcome)
}
