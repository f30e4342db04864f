//! Dialogue Configuration
//!
//! Reveal timing, the stored line-break marker and the content directory,
//! read from a TOML file with per-field defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::info;

use crate::error::{DialogueError, Result};

const DEFAULT_REVEAL_INTERVAL: f32 = 0.05;
const DEFAULT_LINE_BREAK_MARKER: char = '/';

/// Config as it appears in TOML
#[derive(Debug, Clone, Deserialize)]
struct RawDialogueConfig {
    #[serde(default = "default_reveal_interval")]
    reveal_interval: f32,
    #[serde(default = "default_line_break_marker")]
    line_break_marker: String,
    #[serde(default = "default_data_dir")]
    data_dir: PathBuf,
}

fn default_reveal_interval() -> f32 {
    DEFAULT_REVEAL_INTERVAL
}

fn default_line_break_marker() -> String {
    DEFAULT_LINE_BREAK_MARKER.to_string()
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

/// Validated dialogue configuration
#[derive(Debug, Clone, PartialEq)]
pub struct DialogueConfig {
    /// Seconds between revealed characters
    pub reveal_interval: f32,
    /// Character stored in place of a literal newline
    pub line_break_marker: char,
    /// Root of the content directory (`dialogue/`, `npcs/`)
    pub data_dir: PathBuf,
}

impl Default for DialogueConfig {
    fn default() -> Self {
        Self {
            reveal_interval: DEFAULT_REVEAL_INTERVAL,
            line_break_marker: DEFAULT_LINE_BREAK_MARKER,
            data_dir: default_data_dir(),
        }
    }
}

impl DialogueConfig {
    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| DialogueError::load(format!("{:?}", path), e))?;
        let config = Self::from_toml_str(&content)?;
        info!(
            "Loaded dialogue config from {:?} (interval {}s, marker {:?})",
            path, config.reveal_interval, config.line_break_marker
        );
        Ok(config)
    }

    /// Parse and validate config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let raw: RawDialogueConfig = toml::from_str(content)
            .map_err(|e| DialogueError::Config(e.to_string()))?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawDialogueConfig) -> Result<Self> {
        if !raw.reveal_interval.is_finite() || raw.reveal_interval <= 0.0 {
            return Err(DialogueError::Config(format!(
                "reveal_interval must be a positive number of seconds, got {}",
                raw.reveal_interval
            )));
        }

        let mut chars = raw.line_break_marker.chars();
        let marker = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => {
                return Err(DialogueError::Config(format!(
                    "line_break_marker must be a single character, got {:?}",
                    raw.line_break_marker
                )));
            }
        };
        if marker == '\n' || marker == '\r' {
            return Err(DialogueError::Config(
                "line_break_marker cannot be a literal line break".to_string(),
            ));
        }

        Ok(Self {
            reveal_interval: raw.reveal_interval,
            line_break_marker: marker,
            data_dir: raw.data_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = DialogueConfig::from_toml_str("").unwrap();
        assert_eq!(config, DialogueConfig::default());
        assert_eq!(config.line_break_marker, '/');
        assert_eq!(config.data_dir, PathBuf::from("data"));
    }

    #[test]
    fn test_config_overrides() {
        let config = DialogueConfig::from_toml_str(
            r#"
reveal_interval = 0.1
line_break_marker = "|"
data_dir = "content"
"#,
        )
        .unwrap();
        assert_eq!(config.reveal_interval, 0.1);
        assert_eq!(config.line_break_marker, '|');
        assert_eq!(config.data_dir, PathBuf::from("content"));
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(matches!(
            DialogueConfig::from_toml_str("reveal_interval = 0.0"),
            Err(DialogueError::Config(_))
        ));
        assert!(matches!(
            DialogueConfig::from_toml_str("reveal_interval = -1.0"),
            Err(DialogueError::Config(_))
        ));
        assert!(matches!(
            DialogueConfig::from_toml_str("line_break_marker = \"//\""),
            Err(DialogueError::Config(_))
        ));
        assert!(matches!(
            DialogueConfig::from_toml_str("line_break_marker = \"\""),
            Err(DialogueError::Config(_))
        ));
        assert!(matches!(
            DialogueConfig::from_toml_str("line_break_marker = \"\\n\""),
            Err(DialogueError::Config(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"reveal_interval = 0.02\n").unwrap();

        let config = DialogueConfig::load(file.path()).unwrap();
        assert_eq!(config.reveal_interval, 0.02);
        assert_eq!(config.line_break_marker, '/');
    }

    #[test]
    fn test_shipped_config_is_valid() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/config.toml");
        let config = DialogueConfig::load(&path).unwrap();
        assert_eq!(config.line_break_marker, '/');
    }
}
