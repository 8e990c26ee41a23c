// Equip slot value object

use serde::{Deserialize, Serialize};

/// Which body/gear position an item occupies. Tags the server adds later
/// land on `Unknown` instead of failing the whole catalog parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EquipSlot {
    Weapon,
    Head,
    Body,
    Back,
    Hands,
    Feet,
    Pet,
    #[default]
    #[serde(other)]
    Unknown,
}

impl EquipSlot {
    pub fn as_str(&self) -> &'static str {
        match self {
            EquipSlot::Weapon => "Weapon",
            EquipSlot::Head => "Head",
            EquipSlot::Body => "Body",
            EquipSlot::Back => "Back",
            EquipSlot::Hands => "Hands",
            EquipSlot::Feet => "Feet",
            EquipSlot::Pet => "Pet",
            EquipSlot::Unknown => "Unknown",
        }
    }
}

impl From<&str> for EquipSlot {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "weapon" => EquipSlot::Weapon,
            "head" => EquipSlot::Head,
            "body" => EquipSlot::Body,
            "back" => EquipSlot::Back,
            "hands" => EquipSlot::Hands,
            "feet" => EquipSlot::Feet,
            "pet" => EquipSlot::Pet,
            _ => EquipSlot::Unknown,
        }
    }
}
