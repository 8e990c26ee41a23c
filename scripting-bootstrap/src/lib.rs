pub mod context;
pub mod lifecycle;
pub mod telemetry;

pub use context::AppContext;
pub use lifecycle::{init, start_embedded, EngineHandle};
pub use telemetry::init_tracing;

// Facade re-exports so an embedding host depends on one crate.
pub use scripting_application::{commands, queries, AppError, AppState, Metrics};
pub use scripting_domain::ports::{CatalogFetcher, EquipTarget, RosterProvider};
pub use scripting_domain::{
    AccessLevel, CatalogError, CatalogItem, ColorChannels, EquipSet, EquipSlot, Npc, Player,
    ResourceKind, RuntimeConfig, Selector,
};
