//! Dialogue Script Store
//!
//! Loads dialogue tables from TOML and JSON files. Keys are unique across
//! all files; the store is never mutated after it is built.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{info, warn};

use super::definition::{accept_key, decline_key, DialogScript, RawDialogScript};
use crate::error::{DialogueError, Result};

/// Content file formats the store understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ContentFormat {
    Toml,
    Json,
}

impl ContentFormat {
    fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Some(ContentFormat::Toml),
            Some("json") => Some(ContentFormat::Json),
            _ => None,
        }
    }

    fn parse(self, content: &str, origin: &str) -> Result<BTreeMap<String, RawDialogScript>> {
        match self {
            ContentFormat::Toml => {
                toml::from_str(content).map_err(|e| DialogueError::load(origin, e))
            }
            ContentFormat::Json => {
                serde_json::from_str(content).map_err(|e| DialogueError::load(origin, e))
            }
        }
    }
}

/// Registry of every dialogue script, keyed by dialogue key
#[derive(Debug, Clone, Default)]
pub struct ScriptStore {
    scripts: BTreeMap<String, Arc<DialogScript>>,
}

impl ScriptStore {
    /// Load every dialogue file under `data_dir/dialogue`
    pub fn load_from_directory(data_dir: &Path) -> Result<Self> {
        let dialogue_dir = data_dir.join("dialogue");
        let mut store = Self::default();

        if !dialogue_dir.exists() {
            warn!("Dialogue directory does not exist: {:?}", dialogue_dir);
            return Ok(store);
        }

        let entries = std::fs::read_dir(&dialogue_dir)
            .map_err(|e| DialogueError::load(format!("{:?}", dialogue_dir), e))?;

        let mut paths: Vec<PathBuf> = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| DialogueError::load(format!("{:?}", dialogue_dir), e))?;
            paths.push(entry.path());
        }
        paths.sort();

        for path in paths {
            let Some(format) = ContentFormat::from_path(&path) else {
                continue;
            };
            let origin = format!("{:?}", path);
            let content =
                std::fs::read_to_string(&path).map_err(|e| DialogueError::load(&origin, e))?;
            store.insert_table(format.parse(&content, &origin)?, &origin)?;
        }

        info!("Loaded {} dialogue scripts", store.len());
        Ok(store)
    }

    /// Build a store from a TOML dialogue table
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut store = Self::default();
        store.insert_table(ContentFormat::Toml.parse(content, "<toml>")?, "<toml>")?;
        Ok(store)
    }

    /// Build a store from a JSON dialogue table
    pub fn from_json_str(content: &str) -> Result<Self> {
        let mut store = Self::default();
        store.insert_table(ContentFormat::Json.parse(content, "<json>")?, "<json>")?;
        Ok(store)
    }

    /// Build a store from already-constructed scripts
    pub fn from_scripts(scripts: impl IntoIterator<Item = DialogScript>) -> Result<Self> {
        let mut store = Self::default();
        for script in scripts {
            store.insert(script, "<memory>")?;
        }
        Ok(store)
    }

    fn insert_table(
        &mut self,
        table: BTreeMap<String, RawDialogScript>,
        origin: &str,
    ) -> Result<()> {
        for (key, raw) in table {
            let script = DialogScript::from_raw(&key, raw)?;
            self.insert(script, origin)?;
        }
        Ok(())
    }

    fn insert(&mut self, script: DialogScript, origin: &str) -> Result<()> {
        if self.scripts.contains_key(script.key()) {
            return Err(DialogueError::DuplicateKey {
                key: script.key().to_string(),
                origin: origin.to_string(),
            });
        }
        self.scripts.insert(script.key().to_string(), Arc::new(script));
        Ok(())
    }

    /// Look up a script by key
    pub fn lookup(&self, key: &str) -> Result<Arc<DialogScript>> {
        self.scripts
            .get(key)
            .cloned()
            .ok_or_else(|| DialogueError::MissingKey(key.to_string()))
    }

    /// Check if a key exists
    pub fn contains(&self, key: &str) -> bool {
        self.scripts.contains_key(key)
    }

    /// Get all dialogue keys in order
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.scripts.keys()
    }

    pub fn len(&self) -> usize {
        self.scripts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
    }

    /// Check that every quest has its offer, accept and decline branches.
    ///
    /// Returns the missing keys; each one is also logged.
    pub fn validate_quest_branches<'a>(
        &self,
        quests: impl IntoIterator<Item = &'a str>,
    ) -> Vec<String> {
        let mut missing = Vec::new();
        for quest in quests {
            for key in [quest.to_string(), accept_key(quest), decline_key(quest)] {
                if !self.contains(&key) {
                    warn!("Quest '{}' references missing dialogue '{}'", quest, key);
                    missing.push(key);
                }
            }
        }
        missing
    }
}
