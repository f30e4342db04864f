//! Conversation Controller
//!
//! Owns the conversation state and routes input to it. Opening a
//! conversation locks the camera and switches the input mode; closing
//! undoes both. Continue presses go to exactly one handler, picked from the
//! session state: plain dialogue while `Active`, the quest branch while
//! `QuestPrompt`.

use tracing::{debug, error, info, warn};

use super::input::{DialogButton, InputAction};
use super::player::ScriptPlayer;
use super::session::{ConversationSession, HandlerMode, SessionState};
use crate::config::DialogueConfig;
use crate::error::{DialogueError, Result};
use crate::npc::NpcProfile;
use crate::quest::QuestBranchController;
use crate::reveal::{RevealEngine, RevealStep};
use crate::script::ScriptStore;
use crate::services::{DialogueServices, InputMode};
use crate::targeting::Targeting;

fn report(err: &DialogueError) {
    error!("Conversation step aborted: {}", err);
}

pub struct ConversationController {
    scripts: ScriptStore,
    reveal: RevealEngine,
    targeting: Targeting,
    session: ConversationSession,
    quest: QuestBranchController,
    services: DialogueServices,
    /// Profile of the NPC being talked to
    npc: Option<NpcProfile>,
}

impl ConversationController {
    pub fn new(config: &DialogueConfig, scripts: ScriptStore, services: DialogueServices) -> Self {
        Self {
            scripts,
            reveal: RevealEngine::from_config(config),
            targeting: Targeting::new(),
            session: ConversationSession::new(),
            quest: QuestBranchController::new(),
            services,
            npc: None,
        }
    }

    // ------------------------------------------------------------------
    // Targeting
    // ------------------------------------------------------------------

    /// The player entered an NPC's conversation range
    pub fn assign_npc(&mut self, npc_id: &str) {
        if self.targeting.assign(npc_id) {
            self.session.reset_line_index();
        }
    }

    /// The player left an NPC's conversation range
    pub fn unassign_npc(&mut self) {
        self.targeting.unassign();
    }

    // ------------------------------------------------------------------
    // Input dispatch
    // ------------------------------------------------------------------

    pub fn handle_input(&mut self, action: InputAction) -> Result<()> {
        match action {
            InputAction::Conversation => self.start_conversation(),
            InputAction::ContinueDialogue => {
                self.continue_pressed();
                Ok(())
            }
            InputAction::CloseDialogue => {
                self.close();
                Ok(())
            }
        }
    }

    pub fn handle_button(&mut self, button: DialogButton) -> Result<()> {
        match button {
            DialogButton::Continue => {
                self.continue_pressed();
                Ok(())
            }
            DialogButton::Rewind => self.rewind(),
            DialogButton::Quest => self.offer_quest(),
            DialogButton::Shop => {
                self.open_shop();
                Ok(())
            }
            DialogButton::Exit => {
                self.close();
                Ok(())
            }
            DialogButton::AcceptQuest => self.accept_quest(),
            DialogButton::DeclineQuest => self.decline_quest(),
        }
    }

    /// Route a continue press to the handler that owns it.
    ///
    /// Returns the handler that received the press, `None` when closed.
    pub fn continue_pressed(&mut self) -> Option<HandlerMode> {
        let mode = self.session.handler_mode();
        let mut player = ScriptPlayer::new(
            &self.scripts,
            &mut self.reveal,
            &mut self.session,
            &mut *self.services.ui,
        );
        match mode {
            Some(HandlerMode::Generic) => player.advance(),
            Some(HandlerMode::Quest) => self.quest.continue_quest(&mut player),
            None => debug!("Continue ignored, no conversation open"),
        }
        mode
    }

    /// Fixed simulation step
    pub fn fixed_update(&mut self, dt: f32) {
        let mut player = ScriptPlayer::new(
            &self.scripts,
            &mut self.reveal,
            &mut self.session,
            &mut *self.services.ui,
        );
        if player.tick(dt) == RevealStep::Completed {
            self.quest.refresh_prompt(&mut player);
        }
    }

    // ------------------------------------------------------------------
    // Session lifecycle
    // ------------------------------------------------------------------

    /// Open a conversation with the targeted NPC
    pub fn start_conversation(&mut self) -> Result<()> {
        let Some(npc_id) = self.targeting.current().map(str::to_owned) else {
            debug!("No NPC targeted, conversation not started");
            return Ok(());
        };
        if self.session.is_open() {
            debug!("Conversation already open");
            return Ok(());
        }

        // Resolve everything that can fail before touching any collaborator
        let npc = self
            .services
            .npcs
            .profile(&npc_id)
            .ok_or_else(|| DialogueError::UnknownNpc(npc_id.clone()))
            .inspect_err(report)?;
        let script = self.scripts.lookup(&npc.id).inspect_err(report)?;

        let services = &mut self.services;
        services.ui.close_all_windows(true);
        services.input.switch_mode(InputMode::Conversation);
        services.camera.set_rotation_locked(true);
        services.npcs.conversation_started(&npc.id);

        services.ui.set_quest_button_visible(false);
        services.ui.set_shop_button_visible(false);

        let offerable = npc
            .quests
            .iter()
            .find(|quest| services.quests.is_offerable(quest))
            .cloned();
        if offerable.is_some() {
            services.ui.set_quest_button_visible(true);
        }
        self.quest.remember(offerable);

        if npc.shop_category().is_some() {
            services.ui.set_shop_button_visible(true);
        }
        services.ui.show_dialog_window();

        self.session.open(&npc.id);
        ScriptPlayer::new(
            &self.scripts,
            &mut self.reveal,
            &mut self.session,
            &mut *self.services.ui,
        )
        .begin_script(script);

        info!("Conversation started with {}", npc.display_name);
        self.npc = Some(npc);
        Ok(())
    }

    /// Close the conversation, cancelling any reveal or quest prompt.
    ///
    /// Returns `false` if nothing was open or a window refused to close.
    pub fn close(&mut self) -> bool {
        if !self.session.is_open() {
            return false;
        }
        if !self.services.ui.close_all_windows(false) {
            warn!("Dialogue window refused to close");
            return false;
        }

        self.reveal.cancel();
        let mut player = ScriptPlayer::new(
            &self.scripts,
            &mut self.reveal,
            &mut self.session,
            &mut *self.services.ui,
        );
        self.quest.reset(&mut player);
        self.session.close();
        self.npc = None;

        self.services.camera.set_rotation_locked(false);
        self.services.input.switch_mode(InputMode::Gameplay);
        info!("Conversation closed");
        true
    }

    /// Restart the NPC's own dialogue from its first line
    pub fn rewind(&mut self) -> Result<()> {
        if self.session.handler_mode() != Some(HandlerMode::Generic) {
            debug!("Rewind ignored in state {:?}", self.session.state());
            return Ok(());
        }
        let Some(npc_id) = self.session.npc_id().map(str::to_owned) else {
            return Ok(());
        };
        ScriptPlayer::new(
            &self.scripts,
            &mut self.reveal,
            &mut self.session,
            &mut *self.services.ui,
        )
        .begin(&npc_id)
        .inspect_err(report)
    }

    // ------------------------------------------------------------------
    // Branch buttons
    // ------------------------------------------------------------------

    /// Open the NPC's shop, if it runs one
    pub fn open_shop(&mut self) {
        if !self.session.is_open() {
            return;
        }
        match self.npc.as_ref().and_then(NpcProfile::shop_category) {
            Some(category) => self.services.shop.open_shop(category),
            None => debug!("NPC has no shop"),
        }
    }

    pub fn offer_quest(&mut self) -> Result<()> {
        let Some(npc) = self.npc.as_ref() else {
            return Ok(());
        };
        let mut player = ScriptPlayer::new(
            &self.scripts,
            &mut self.reveal,
            &mut self.session,
            &mut *self.services.ui,
        );
        self.quest
            .offer(&mut player, &*self.services.quests, npc)
            .inspect_err(report)
    }

    pub fn accept_quest(&mut self) -> Result<()> {
        let mut player = ScriptPlayer::new(
            &self.scripts,
            &mut self.reveal,
            &mut self.session,
            &mut *self.services.ui,
        );
        self.quest
            .accept(&mut player, &mut *self.services.quests)
            .inspect_err(report)
    }

    pub fn decline_quest(&mut self) -> Result<()> {
        let mut player = ScriptPlayer::new(
            &self.scripts,
            &mut self.reveal,
            &mut self.session,
            &mut *self.services.ui,
        );
        self.quest.decline(&mut player).inspect_err(report)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    pub fn handler_mode(&self) -> Option<HandlerMode> {
        self.session.handler_mode()
    }

    pub fn session(&self) -> &ConversationSession {
        &self.session
    }

    pub fn targeting(&self) -> &Targeting {
        &self.targeting
    }

    pub fn scripts(&self) -> &ScriptStore {
        &self.scripts
    }

    /// Text revealed so far for the current line
    pub fn visible_text(&self) -> &str {
        self.reveal.output()
    }

    pub fn is_revealing(&self) -> bool {
        self.reveal.is_revealing()
    }

    pub fn offered_quest(&self) -> Option<&str> {
        self.quest.offered()
    }
}
