use scripting_domain::{AccessLevel, Npc, Player, Selector};

use crate::AppState;

// Read-only predicates over the host roster. The engine holds no character
// state of its own; every call re-reads the host's lists.

/// Finds a player by id or case-insensitive name.
pub fn find_player(state: &AppState, selector: &Selector) -> Option<Player> {
    state.roster.players().into_iter().find(|player| match selector {
        Selector::Id(id) => player.id == *id,
        Selector::Name(name) => player.name.eq_ignore_ascii_case(name),
    })
}

/// Finds an NPC by id or name. NPC names are trimmed before comparing;
/// some host scenes pad them with trailing whitespace.
pub fn find_npc(state: &AppState, selector: &Selector) -> Option<Npc> {
    state.roster.npcs().into_iter().find(|npc| match selector {
        Selector::Id(id) => npc.id == *id,
        Selector::Name(name) => npc.name.trim().eq_ignore_ascii_case(name.trim()),
    })
}

/// Exact-name membership test against the current instance.
pub fn is_player_present(state: &AppState, name: &str) -> bool {
    state.roster.players().iter().any(|player| player.name == name)
}

/// Trimmed-name membership test against the current instance.
pub fn is_npc_present(state: &AppState, name: &str) -> bool {
    state.roster.npcs().iter().any(|npc| npc.name.trim() == name)
}

pub fn player_access(state: &AppState, selector: &Selector) -> Option<AccessLevel> {
    find_player(state, selector).map(|player| player.access)
}

/// Tester or above. `None` when the player is not in the instance.
pub fn is_staff(state: &AppState, selector: &Selector) -> Option<bool> {
    player_access(state, selector).map(AccessLevel::is_staff)
}
