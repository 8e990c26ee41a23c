// Shared fakes for the in-crate test modules.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::anyhow;
use async_trait::async_trait;

use scripting_domain::ports::{CatalogFetcher, EquipTarget, RosterProvider};
use scripting_domain::{CatalogError, EquipSet, Npc, Player, ResourceKind, RuntimeConfig};

use crate::AppState;

/// Three entries: a plain hat, a recolorable cape, a second cape sharing
/// the name.
pub const ITEMS_PAYLOAD: &str = r#"[
    {"id":1,"name":"Hat","slot":"Head"},
    {"id":2,"name":"Cape","slot":"Back","colorR":"00FF00"},
    {"id":3,"name":"Cape","slot":"Back"}
]"#;

/// Serves a fixed payload, optionally failing the first N calls, and counts
/// every fetch.
pub struct CountingFetcher {
    payload: String,
    failures_left: AtomicUsize,
    calls: AtomicUsize,
}

impl CountingFetcher {
    pub fn serving(payload: &str) -> Arc<Self> {
        Self::failing_then_serving(0, payload)
    }

    pub fn failing_then_serving(failures: usize, payload: &str) -> Arc<Self> {
        Arc::new(Self {
            payload: payload.to_string(),
            failures_left: AtomicUsize::new(failures),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogFetcher for CountingFetcher {
    async fn fetch(&self, _resource: ResourceKind) -> Result<String, CatalogError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let remaining = self.failures_left.load(Ordering::SeqCst);
        if remaining > 0 {
            self.failures_left.store(remaining - 1, Ordering::SeqCst);
            return Err(CatalogError::Unavailable(anyhow!("network down")));
        }
        Ok(self.payload.clone())
    }
}

pub struct FixedRoster {
    pub players: Vec<Player>,
    pub npcs: Vec<Npc>,
}

impl RosterProvider for FixedRoster {
    fn players(&self) -> Vec<Player> {
        self.players.clone()
    }

    fn npcs(&self) -> Vec<Npc> {
        self.npcs.clone()
    }
}

pub fn empty_roster() -> Arc<FixedRoster> {
    Arc::new(FixedRoster {
        players: Vec::new(),
        npcs: Vec::new(),
    })
}

pub fn state_with(fetcher: Arc<dyn CatalogFetcher>) -> AppState {
    AppState::new(RuntimeConfig::default(), fetcher, empty_roster())
}

/// Records what the engine asked the host to do.
#[derive(Default)]
pub struct FakeTarget {
    pub equips: EquipSet,
    pub refreshes: usize,
    pub visible: Option<bool>,
    pub name_plate_visible: Option<bool>,
    pub pet_visible: Option<bool>,
}

impl EquipTarget for FakeTarget {
    fn equips(&self) -> &EquipSet {
        &self.equips
    }

    fn equips_mut(&mut self) -> &mut EquipSet {
        &mut self.equips
    }

    fn refresh_assets(&mut self) {
        self.refreshes += 1;
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = Some(visible);
    }

    fn set_name_plate_visible(&mut self, visible: bool) {
        self.name_plate_visible = Some(visible);
    }

    fn set_pet_visible(&mut self, visible: bool) {
        self.pet_visible = Some(visible);
    }
}
