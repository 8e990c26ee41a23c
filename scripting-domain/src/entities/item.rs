// Catalog item entity

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::value_objects::{EquipSlot, Selector};

/// One record of the remote item catalog. Fields this library does not
/// interpret are kept verbatim in `extra` so nothing the server sends is
/// lost on a round trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub slot: EquipSlot,
    #[serde(rename = "colorR", default, skip_serializing_if = "Option::is_none")]
    pub color_r: Option<String>,
    #[serde(rename = "colorG", default, skip_serializing_if = "Option::is_none")]
    pub color_g: Option<String>,
    #[serde(rename = "colorB", default, skip_serializing_if = "Option::is_none")]
    pub color_b: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CatalogItem {
    /// Customizable iff the first color channel is present and non-empty.
    pub fn is_color_customizable(&self) -> bool {
        self.color_r
            .as_deref()
            .map(|channel| !channel.trim().is_empty())
            .unwrap_or(false)
    }

    /// Overwrites each supplied channel; unspecified channels keep their
    /// previous value.
    pub fn recolor(&mut self, channels: ColorChannels) {
        if let Some(r) = channels.r {
            self.color_r = Some(r);
        }
        if let Some(g) = channels.g {
            self.color_g = Some(g);
        }
        if let Some(b) = channels.b {
            self.color_b = Some(b);
        }
    }

    pub fn matches(&self, selector: &Selector) -> bool {
        match selector {
            Selector::Id(id) => self.id == *id,
            Selector::Name(name) => self.name.eq_ignore_ascii_case(name),
        }
    }
}

/// Per-strip hex codes for a recolor. `None` leaves that strip alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorChannels {
    pub r: Option<String>,
    pub g: Option<String>,
    pub b: Option<String>,
}

impl ColorChannels {
    pub fn red(code: impl Into<String>) -> Self {
        Self {
            r: Some(code.into()),
            ..Self::default()
        }
    }
}
