//! Conversation Module
//!
//! Session lifecycle, continue-input routing and the script player shared by
//! plain dialogue and quest branches.

pub mod controller;
pub mod input;
pub mod player;
pub mod session;

pub use controller::ConversationController;
pub use input::{DialogButton, InputAction};
pub use player::ScriptPlayer;
pub use session::{ConversationSession, HandlerMode, SessionState};
