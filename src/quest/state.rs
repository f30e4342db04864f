//! Quest State Tracking
//!
//! Tracks which quests a player can be offered, has accepted or has finished.

use tracing::{info, warn};

use crate::services::QuestLog;

/// Status of a quest for a player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestStatus {
    /// Quest is unlocked but not started
    Available,
    /// Quest is accepted and in progress
    Active,
    /// Quest has been completed
    Completed,
}

/// All quest state for a single player
#[derive(Debug, Clone, Default)]
pub struct QuestJournal {
    active_quests: Vec<String>,
    completed_quests: Vec<String>,
    available_quests: Vec<String>,
}

impl QuestJournal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make a quest available
    pub fn unlock_quest(&mut self, quest_id: &str) {
        if self.status(quest_id).is_none() {
            self.available_quests.push(quest_id.to_string());
        }
    }

    /// Start a quest
    pub fn start_quest(&mut self, quest_id: &str) {
        if self.is_quest_active(quest_id) {
            warn!("Quest {} is already active", quest_id);
            return;
        }
        // Remove from available
        self.available_quests.retain(|id| id != quest_id);
        self.active_quests.push(quest_id.to_string());
        info!("Quest {} accepted", quest_id);
    }

    /// Complete an active quest
    pub fn complete_quest(&mut self, quest_id: &str) {
        if !self.is_quest_active(quest_id) {
            warn!("Cannot complete quest {}: not active", quest_id);
            return;
        }
        self.active_quests.retain(|id| id != quest_id);
        self.completed_quests.push(quest_id.to_string());
    }

    pub fn status(&self, quest_id: &str) -> Option<QuestStatus> {
        if self.is_quest_active(quest_id) {
            Some(QuestStatus::Active)
        } else if self.is_quest_completed(quest_id) {
            Some(QuestStatus::Completed)
        } else if self.is_quest_available(quest_id) {
            Some(QuestStatus::Available)
        } else {
            None
        }
    }

    pub fn is_quest_active(&self, quest_id: &str) -> bool {
        self.active_quests.iter().any(|id| id == quest_id)
    }

    pub fn is_quest_completed(&self, quest_id: &str) -> bool {
        self.completed_quests.iter().any(|id| id == quest_id)
    }

    pub fn is_quest_available(&self, quest_id: &str) -> bool {
        self.available_quests.iter().any(|id| id == quest_id)
    }
}

impl QuestLog for QuestJournal {
    fn is_active(&self, quest: &str) -> bool {
        self.is_quest_active(quest)
    }

    fn is_offerable(&self, quest: &str) -> bool {
        self.status(quest) == Some(QuestStatus::Available)
    }

    fn activate(&mut self, quest: &str) {
        self.start_quest(quest);
    }
}
