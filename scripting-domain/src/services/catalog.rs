// In-memory item catalog

use crate::entities::CatalogItem;
use crate::error::CatalogError;
use crate::value_objects::{EquipSlot, Selector};

/// The parsed item list. Entries keep server response order; the list is
/// either built from one whole payload or not built at all.
#[derive(Debug, Default)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    /// Parses a whole catalog payload. A single bad record rejects the
    /// payload; there is no partially populated catalog.
    pub fn from_json(payload: &str) -> Result<Self, CatalogError> {
        let items: Vec<CatalogItem> = serde_json::from_str(payload)?;
        Ok(Self { items })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// First entry matching the selector: id equality for `Selector::Id`,
    /// case-insensitive exact name for `Selector::Name`.
    pub fn find(&self, selector: &Selector) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.matches(selector))
    }

    pub fn find_mut(&mut self, selector: &Selector) -> Option<&mut CatalogItem> {
        self.items.iter_mut().find(|item| item.matches(selector))
    }

    /// Entries worn in `slot`; `None` is the no-filter sentinel returning
    /// the full catalog.
    pub fn by_slot(&self, slot: Option<EquipSlot>) -> Vec<&CatalogItem> {
        match slot {
            Some(slot) => self.items.iter().filter(|item| item.slot == slot).collect(),
            None => self.items.iter().collect(),
        }
    }
}
