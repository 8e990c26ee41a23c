use thiserror::Error;

use scripting_domain::{CatalogError, EquipSlot};

/// Operation failures. None of these are fatal to the host process; every
/// failure is a value the caller decides about.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("no item matched '{0}'")]
    ItemNotFound(String),
    #[error("item '{0}' does not support custom colors")]
    NotCustomizable(String),
    #[error("nothing equipped in the {} slot", .0.as_str())]
    SlotEmpty(EquipSlot),
    #[error("'{0}' is not a hex color channel")]
    BadChannel(String),
}
