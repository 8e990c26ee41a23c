// Host-owned character snapshots

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::entities::CatalogItem;
use crate::value_objects::{AccessLevel, EquipSlot};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub access: AccessLevel,
}

/// Some host scenes pad NPC names with trailing whitespace; matching helpers
/// trim before comparing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Npc {
    pub id: u32,
    pub name: String,
}

/// The worn-entries mapping of an equip target, one item per slot.
pub type EquipSet = HashMap<EquipSlot, CatalogItem>;
