//! Conversation Session
//!
//! State of the open conversation. One state tag decides which handler owns
//! the continue input:
//!
//! | from          | to            | trigger                          |
//! |---------------|---------------|----------------------------------|
//! | `Closed`      | `Active`      | conversation started             |
//! | `Active`      | `QuestPrompt` | quest offered (not yet accepted) |
//! | `QuestPrompt` | `Active`      | quest accepted or declined       |
//! | `Active`      | `Closed`      | conversation closed              |
//! | `QuestPrompt` | `Closed`      | conversation closed              |
//!
//! Every other transition is refused.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::script::DialogScript;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Closed,
    /// Plain dialogue: revealing or waiting for continue
    Active,
    /// Quest offer in progress, waiting for accept/decline
    QuestPrompt,
}

/// Owner of the continue input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerMode {
    Generic,
    Quest,
}

impl SessionState {
    /// Handler that receives continue presses in this state
    pub fn handler_mode(self) -> Option<HandlerMode> {
        match self {
            SessionState::Closed => None,
            SessionState::Active => Some(HandlerMode::Generic),
            SessionState::QuestPrompt => Some(HandlerMode::Quest),
        }
    }

    pub fn can_transition(self, to: SessionState) -> bool {
        use SessionState::*;
        matches!(
            (self, to),
            (Closed, Active)
                | (Active, QuestPrompt)
                | (QuestPrompt, Active)
                | (Active, Closed)
                | (QuestPrompt, Closed)
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConversationSession {
    state: SessionState,
    npc_id: Option<String>,
    /// Script behind the active dialogue key
    script: Option<Arc<DialogScript>>,
    /// Index of the next line to reveal
    line_index: usize,
}

impl ConversationSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to `to` if the transition table allows it
    pub fn transition(&mut self, to: SessionState) -> bool {
        let legal = self.state.can_transition(to);
        debug_assert!(legal, "illegal session transition {:?} -> {:?}", self.state, to);
        if !legal {
            warn!("Refused session transition {:?} -> {:?}", self.state, to);
            return false;
        }
        debug!("Session {:?} -> {:?}", self.state, to);
        self.state = to;
        true
    }

    /// Open a conversation with `npc_id`
    pub fn open(&mut self, npc_id: &str) -> bool {
        if !self.transition(SessionState::Active) {
            return false;
        }
        self.npc_id = Some(npc_id.to_string());
        self.line_index = 0;
        true
    }

    /// Return to the closed default
    pub fn close(&mut self) {
        if self.state != SessionState::Closed {
            self.transition(SessionState::Closed);
        }
        *self = Self::default();
    }

    /// Make `script` the active dialogue, positioned before its first line
    pub fn begin_script(&mut self, script: Arc<DialogScript>) {
        self.script = Some(script);
        self.line_index = 0;
    }

    /// Take the next line of the active script, if one remains
    pub fn next_line(&mut self) -> Option<String> {
        let line = self.script.as_ref()?.line(self.line_index)?.to_string();
        self.line_index += 1;
        Some(line)
    }

    /// Whether the active script has lines not yet revealed
    pub fn has_more_lines(&self) -> bool {
        self.script
            .as_ref()
            .is_some_and(|script| self.line_index < script.len())
    }

    pub fn reset_line_index(&mut self) {
        self.line_index = 0;
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn handler_mode(&self) -> Option<HandlerMode> {
        self.state.handler_mode()
    }

    pub fn is_open(&self) -> bool {
        self.state != SessionState::Closed
    }

    pub fn npc_id(&self) -> Option<&str> {
        self.npc_id.as_deref()
    }

    pub fn active_key(&self) -> Option<&str> {
        self.script.as_ref().map(|script| script.key())
    }

    pub fn line_index(&self) -> usize {
        self.line_index
    }
}
