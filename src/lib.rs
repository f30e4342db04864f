//! NPC Conversation Engine
//!
//! Drives NPC conversations: keyed dialogue scripts loaded from data files,
//! a timed typewriter reveal, reference-counted NPC targeting and the
//! quest offer/accept/decline branch that shares the continue input with
//! plain dialogue.

pub mod config;
pub mod conversation;
pub mod error;
pub mod npc;
pub mod quest;
pub mod reveal;
pub mod script;
pub mod services;
pub mod targeting;

#[cfg(test)]
mod testing;

pub use config::DialogueConfig;
pub use conversation::{
    ConversationController, ConversationSession, DialogButton, HandlerMode, InputAction,
    SessionState,
};
pub use error::{DialogueError, Result};
pub use npc::{NpcKind, NpcProfile, NpcRegistry};
pub use quest::{QuestBranchController, QuestJournal, QuestStatus};
pub use reveal::{RevealEngine, RevealPhase, RevealStep};
pub use script::{DialogScript, ScriptStore};
pub use services::{
    CameraControl, DialogueServices, DialogueUi, InputMode, InputModeSwitch, NpcDirectory,
    QuestLog, ShopCategory, ShopService,
};
pub use targeting::Targeting;
