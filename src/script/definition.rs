//! Dialogue Script Structures
//!
//! These structures are deserialized from dialogue content files.

use serde::Deserialize;

use crate::error::{DialogueError, Result};

/// Suffix of the branch revealed after a quest is accepted
pub const ACCEPT_SUFFIX: &str = "_Accept";
/// Suffix of the branch revealed after a quest is declined
pub const DECLINE_SUFFIX: &str = "_Decline";

/// Raw dialogue entry as it appears in a content file
#[derive(Debug, Clone, Deserialize)]
pub struct RawDialogScript {
    pub lines: Vec<String>,
}

/// Ordered lines spoken under one dialogue key
///
/// Lines are stored exactly as authored; line-break markers are only
/// substituted while revealing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogScript {
    key: String,
    lines: Vec<String>,
}

impl DialogScript {
    /// Create a script, rejecting one without lines
    pub fn new(key: impl Into<String>, lines: Vec<String>) -> Result<Self> {
        let key = key.into();
        if lines.is_empty() {
            return Err(DialogueError::EmptyScript(key));
        }
        Ok(Self { key, lines })
    }

    pub fn from_raw(key: &str, raw: RawDialogScript) -> Result<Self> {
        Self::new(key, raw.lines)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Get a line by index
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Number of lines (always at least one)
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Key of the branch revealed after accepting `quest`
pub fn accept_key(quest: &str) -> String {
    format!("{}{}", quest, ACCEPT_SUFFIX)
}

/// Key of the branch revealed after declining `quest`
pub fn decline_key(quest: &str) -> String {
    format!("{}{}", quest, DECLINE_SUFFIX)
}
