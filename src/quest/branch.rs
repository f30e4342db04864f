//! Quest Branch
//!
//! The quest sub-flow of a conversation: offer the quest dialogue, prompt
//! for accept/decline once it has been read, then reveal the matching
//! `_Accept` or `_Decline` branch. While the offer is open the session is in
//! `QuestPrompt`, which routes continue presses here instead of to plain
//! dialogue.

use tracing::{debug, info, warn};

use crate::conversation::{ScriptPlayer, SessionState};
use crate::error::Result;
use crate::npc::NpcProfile;
use crate::script::{accept_key, decline_key};
use crate::services::QuestLog;

#[derive(Debug, Clone, Default)]
pub struct QuestBranchController {
    /// Quest offered by the current NPC, chosen when the conversation opened
    offered: Option<String>,
    /// Accept/decline buttons are showing
    choices_visible: bool,
}

impl QuestBranchController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember the quest the quest button will offer
    pub fn remember(&mut self, quest: Option<String>) {
        self.offered = quest;
    }

    pub fn offered(&self) -> Option<&str> {
        self.offered.as_deref()
    }

    pub fn choices_visible(&self) -> bool {
        self.choices_visible
    }

    /// Quest button: show the quest dialogue, or jump straight to the accept
    /// branch when one of the NPC's quests is already in progress.
    pub fn offer(
        &mut self,
        player: &mut ScriptPlayer<'_>,
        quests: &dyn QuestLog,
        npc: &NpcProfile,
    ) -> Result<()> {
        if player.session.state() != SessionState::Active {
            warn!("Quest offer ignored in state {:?}", player.session.state());
            return Ok(());
        }

        if let Some(active) = npc.quests.iter().find(|quest| quests.is_active(quest)) {
            debug!("Quest {} already active, skipping offer", active);
            return player.begin(&accept_key(active));
        }

        let Some(quest) = self.offered.clone() else {
            warn!("{} has no quest to offer", npc.id);
            return Ok(());
        };

        player.begin(&quest)?;
        player.session.transition(SessionState::QuestPrompt);
        self.choices_visible = false;
        debug!("Continue input bound to quest dialogue for {}", quest);

        self.refresh_prompt(player);
        Ok(())
    }

    /// Continue press while the quest offer is open
    pub fn continue_quest(&mut self, player: &mut ScriptPlayer<'_>) {
        player.advance();
        self.refresh_prompt(player);
    }

    /// Show quest info and accept/decline once the offer has been fully read
    pub fn refresh_prompt(&mut self, player: &mut ScriptPlayer<'_>) {
        if self.choices_visible
            || player.session.state() != SessionState::QuestPrompt
            || !player.is_exhausted()
        {
            return;
        }
        if let Some(quest) = self.offered.as_deref() {
            player.ui.show_quest_info(quest);
            player.ui.set_quest_choice_visible(true);
            self.choices_visible = true;
        }
    }

    pub fn accept(&mut self, player: &mut ScriptPlayer<'_>, quests: &mut dyn QuestLog) -> Result<()> {
        let Some(quest) = self.prompted_quest(player) else {
            return Ok(());
        };
        self.resolve(player, &accept_key(&quest))?;
        quests.activate(&quest);
        info!("Quest {} accepted", quest);
        Ok(())
    }

    pub fn decline(&mut self, player: &mut ScriptPlayer<'_>) -> Result<()> {
        let Some(quest) = self.prompted_quest(player) else {
            return Ok(());
        };
        self.resolve(player, &decline_key(&quest))?;
        info!("Quest {} declined", quest);
        Ok(())
    }

    /// Forget the offer when the conversation closes
    pub fn reset(&mut self, player: &mut ScriptPlayer<'_>) {
        if self.choices_visible {
            player.ui.set_quest_choice_visible(false);
        }
        *self = Self::default();
    }

    fn prompted_quest(&self, player: &ScriptPlayer<'_>) -> Option<String> {
        if player.session.state() != SessionState::QuestPrompt {
            warn!("No quest prompt open");
            return None;
        }
        self.offered.clone()
    }

    /// Reveal the answer branch and hand continue back to plain dialogue
    fn resolve(&mut self, player: &mut ScriptPlayer<'_>, key: &str) -> Result<()> {
        player.begin(key)?;
        player.ui.set_quest_choice_visible(false);
        self.choices_visible = false;
        player.session.transition(SessionState::Active);
        debug!("Continue input bound to plain dialogue");
        Ok(())
    }
}
