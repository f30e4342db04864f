//! Quest Module
//!
//! The quest offer/accept/decline conversation branch and the player's quest
//! journal that answers "is this quest active / offerable".

pub mod branch;
pub mod state;

pub use branch::QuestBranchController;
pub use state::{QuestJournal, QuestStatus};
