//! Error types for dialogue content and conversation operations

use thiserror::Error;

/// Errors surfaced by content loading and conversation operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DialogueError {
    /// A dialogue key was referenced that the script store does not contain
    #[error("Dialogue key not found: {0}")]
    MissingKey(String),

    /// A dialogue script was authored without any lines
    #[error("Dialogue '{0}' has no lines")]
    EmptyScript(String),

    /// The same dialogue key was defined twice
    #[error("Duplicate dialogue key '{key}' in {origin}")]
    DuplicateKey { key: String, origin: String },

    /// A content file could not be read or parsed
    #[error("Failed to load {origin}: {reason}")]
    Load { origin: String, reason: String },

    /// The NPC directory has no profile for the targeted NPC
    #[error("NPC not found: {0}")]
    UnknownNpc(String),

    /// Configuration failed validation
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl DialogueError {
    /// Create a load error for a file or in-memory source
    pub fn load(origin: impl Into<String>, reason: impl ToString) -> Self {
        Self::Load {
            origin: origin.into(),
            reason: reason.to_string(),
        }
    }

    /// Whether this error points at a content-authoring defect
    pub fn is_content_error(&self) -> bool {
        matches!(
            self,
            Self::MissingKey(_) | Self::EmptyScript(_) | Self::DuplicateKey { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, DialogueError>;
