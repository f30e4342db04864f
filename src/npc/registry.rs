//! NPC Registry
//!
//! Loads NPC profiles from TOML files and serves them to the conversation
//! controller.

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, info, warn};

use super::definition::{NpcProfile, RawNpcProfile};
use crate::error::{DialogueError, Result};
use crate::services::NpcDirectory;

/// Registry for all NPC profiles
#[derive(Debug, Clone, Default)]
pub struct NpcRegistry {
    npcs: HashMap<String, NpcProfile>,
}

impl NpcRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load all NPC profiles from `data_dir/npcs`
    pub fn load_from_directory(&mut self, data_dir: &Path) -> Result<()> {
        let npcs_dir = data_dir.join("npcs");

        if !npcs_dir.exists() {
            warn!("NPC directory does not exist: {:?}", npcs_dir);
            return Ok(());
        }

        let entries = std::fs::read_dir(&npcs_dir)
            .map_err(|e| DialogueError::load(format!("{:?}", npcs_dir), e))?;

        for entry in entries {
            let entry = entry.map_err(|e| DialogueError::load(format!("{:?}", npcs_dir), e))?;
            let path = entry.path();

            if path.extension().is_some_and(|ext| ext == "toml") {
                let origin = format!("{:?}", path);
                let content =
                    std::fs::read_to_string(&path).map_err(|e| DialogueError::load(&origin, e))?;

                // Parse as table of NPCs
                let table: HashMap<String, RawNpcProfile> =
                    toml::from_str(&content).map_err(|e| DialogueError::load(&origin, e))?;

                for (id, raw) in table {
                    if self.npcs.contains_key(&id) {
                        warn!("Duplicate NPC ID '{}' in {:?}, overwriting", id, path);
                    }
                    self.insert(NpcProfile::from_raw(&id, &raw));
                }
            }
        }

        info!("Loaded {} NPC profiles", self.npcs.len());
        Ok(())
    }

    pub fn insert(&mut self, profile: NpcProfile) {
        self.npcs.insert(profile.id.clone(), profile);
    }

    pub fn get(&self, npc_id: &str) -> Option<&NpcProfile> {
        self.npcs.get(npc_id)
    }

    /// Every quest offered by some NPC
    pub fn quest_ids(&self) -> impl Iterator<Item = &str> {
        self.npcs
            .values()
            .flat_map(|npc| npc.quests.iter().map(String::as_str))
    }

    pub fn len(&self) -> usize {
        self.npcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.npcs.is_empty()
    }
}

impl NpcDirectory for NpcRegistry {
    fn profile(&self, npc_id: &str) -> Option<NpcProfile> {
        self.npcs.get(npc_id).cloned()
    }

    fn conversation_started(&mut self, npc_id: &str) {
        debug!("Conversation started with {}", npc_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::npc::NpcKind;
    use crate::script::ScriptStore;
    use tempfile::TempDir;

    #[test]
    fn test_load_npcs_from_directory() {
        let temp_dir = TempDir::new().unwrap();
        let npcs_dir = temp_dir.path().join("npcs");
        std::fs::create_dir(&npcs_dir).unwrap();
        std::fs::write(
            npcs_dir.join("town.toml"),
            r#"
[Blacksmith]
display_name = "Hilda"
kind = "equipment_shop"

[Elder]
quests = ["FetchWater"]
"#,
        )
        .unwrap();

        let mut registry = NpcRegistry::new();
        registry.load_from_directory(temp_dir.path()).unwrap();

        assert_eq!(registry.len(), 2);
        let smith = registry.profile("Blacksmith").unwrap();
        assert_eq!(smith.display_name, "Hilda");
        assert_eq!(smith.kind, NpcKind::EquipmentShop);
        assert_eq!(registry.quest_ids().collect::<Vec<_>>(), vec!["FetchWater"]);
        assert!(registry.profile("Nobody").is_none());
    }

    #[test]
    fn test_unknown_kind_is_load_error() {
        let temp_dir = TempDir::new().unwrap();
        let npcs_dir = temp_dir.path().join("npcs");
        std::fs::create_dir(&npcs_dir).unwrap();
        std::fs::write(npcs_dir.join("bad.toml"), "[Guard]\nkind = \"tavern\"\n").unwrap();

        let mut registry = NpcRegistry::new();
        let err = registry.load_from_directory(temp_dir.path()).unwrap_err();
        assert!(matches!(err, DialogueError::Load { .. }));
    }

    #[test]
    fn test_shipped_npcs_have_dialogue() {
        let data_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
        let mut registry = NpcRegistry::new();
        registry.load_from_directory(&data_dir).unwrap();
        let scripts = ScriptStore::load_from_directory(&data_dir).unwrap();

        for id in ["Blacksmith", "Herbalist", "Elder"] {
            assert!(registry.get(id).is_some(), "missing NPC {}", id);
            assert!(scripts.contains(id), "missing dialogue for {}", id);
        }
        assert!(scripts.validate_quest_branches(registry.quest_ids()).is_empty());
    }
}
