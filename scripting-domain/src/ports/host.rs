use crate::entities::{EquipSet, Npc, Player};

/// A character-like object owned by the host game client that can wear
/// items. The engine writes into the equip map and triggers the host's
/// refresh; it never manages the target's lifecycle.
pub trait EquipTarget: Send {
    fn equips(&self) -> &EquipSet;
    fn equips_mut(&mut self) -> &mut EquipSet;

    /// Rebuild the target's visual assets from the current equip map.
    fn refresh_assets(&mut self);

    fn set_visible(&mut self, visible: bool);
    fn set_name_plate_visible(&mut self, visible: bool);
    fn set_pet_visible(&mut self, visible: bool);
}

/// The live player and NPC lists of the host scene. Implementations return
/// snapshots; the engine holds no handles into the scene graph.
pub trait RosterProvider: Send + Sync {
    fn players(&self) -> Vec<Player>;
    fn npcs(&self) -> Vec<Npc>;
}
