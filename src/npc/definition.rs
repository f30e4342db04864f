//! NPC Profile Structures
//!
//! The conversation-facing view of an NPC: its dialogue key, the quests it
//! hands out and whether it runs a shop.

use serde::Deserialize;

use crate::services::ShopCategory;

/// NPC role as it appears in TOML
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NpcKind {
    #[default]
    Villager,
    PropShop,
    EquipmentShop,
}

impl NpcKind {
    /// Shop opened by this NPC, if it runs one
    pub fn shop_category(&self) -> Option<ShopCategory> {
        match self {
            NpcKind::Villager => None,
            NpcKind::PropShop => Some(ShopCategory::Props),
            NpcKind::EquipmentShop => Some(ShopCategory::Equipment),
        }
    }
}

/// Raw NPC entry as it appears in TOML
#[derive(Debug, Clone, Deserialize)]
pub struct RawNpcProfile {
    pub display_name: Option<String>,
    #[serde(default)]
    pub kind: NpcKind,
    #[serde(default)]
    pub quests: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NpcProfile {
    /// NPC identifier, also its base dialogue key
    pub id: String,
    pub display_name: String,
    pub kind: NpcKind,
    /// Quests this NPC can offer, in priority order
    pub quests: Vec<String>,
}

impl NpcProfile {
    pub fn new(id: impl Into<String>, kind: NpcKind) -> Self {
        let id = id.into();
        Self {
            display_name: id.clone(),
            id,
            kind,
            quests: Vec::new(),
        }
    }

    pub fn with_quests(mut self, quests: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.quests = quests.into_iter().map(Into::into).collect();
        self
    }

    pub fn from_raw(id: &str, raw: &RawNpcProfile) -> Self {
        Self {
            id: id.to_string(),
            display_name: raw.display_name.clone().unwrap_or_else(|| id.to_string()),
            kind: raw.kind,
            quests: raw.quests.clone(),
        }
    }

    pub fn shop_category(&self) -> Option<ShopCategory> {
        self.kind.shop_category()
    }
}
