//! Recording fakes for the collaborator traits.
//!
//! One shared `FakeWorld` implements every collaborator, so a test can hand
//! clones of it to the controller and inspect the recorded state afterwards.

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::DialogueConfig;
use crate::conversation::ConversationController;
use crate::npc::NpcProfile;
use crate::script::ScriptStore;
use crate::services::{
    CameraControl, DialogueServices, DialogueUi, InputMode, InputModeSwitch, NpcDirectory,
    QuestLog, ShopCategory, ShopService,
};

#[derive(Debug, Clone)]
pub struct WorldState {
    pub refuse_close: bool,
    pub windows_closed: u32,
    pub dialog_window_open: bool,
    pub text: String,
    pub continue_visible: bool,
    pub quest_button: bool,
    pub shop_button: bool,
    pub quest_choice: bool,
    pub quest_info: Vec<String>,
    pub camera_locked: bool,
    pub input_mode: InputMode,
    pub npcs: Vec<NpcProfile>,
    pub conversations_started: Vec<String>,
    pub offerable: Vec<String>,
    pub active: Vec<String>,
    pub activated: Vec<String>,
    pub shops_opened: Vec<ShopCategory>,
}

impl Default for WorldState {
    fn default() -> Self {
        Self {
            refuse_close: false,
            windows_closed: 0,
            dialog_window_open: false,
            text: String::new(),
            continue_visible: false,
            quest_button: false,
            shop_button: false,
            quest_choice: false,
            quest_info: Vec::new(),
            camera_locked: false,
            input_mode: InputMode::Gameplay,
            npcs: Vec::new(),
            conversations_started: Vec::new(),
            offerable: Vec::new(),
            active: Vec::new(),
            activated: Vec::new(),
            shops_opened: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FakeWorld(Rc<RefCell<WorldState>>);

impl FakeWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far
    pub fn state(&self) -> WorldState {
        self.0.borrow().clone()
    }

    pub fn add_npc(&self, npc: NpcProfile) {
        self.0.borrow_mut().npcs.push(npc);
    }

    pub fn set_offerable(&self, quest: &str) {
        self.0.borrow_mut().offerable.push(quest.to_string());
    }

    pub fn set_active(&self, quest: &str) {
        self.0.borrow_mut().active.push(quest.to_string());
    }

    pub fn refuse_close(&self, refuse: bool) {
        self.0.borrow_mut().refuse_close = refuse;
    }

    pub fn services(&self) -> DialogueServices {
        DialogueServices::new(
            self.clone(),
            self.clone(),
            self.clone(),
            self.clone(),
            self.clone(),
            self.clone(),
        )
    }

    /// Controller over `scripts` (a TOML dialogue table) wired to this world
    pub fn controller(&self, scripts: &str) -> ConversationController {
        let scripts = ScriptStore::from_toml_str(scripts).unwrap();
        ConversationController::new(&DialogueConfig::default(), scripts, self.services())
    }
}

/// Tick the controller until the running reveal completes
pub fn finish_reveal(ctl: &mut ConversationController) {
    let mut guard = 0;
    while ctl.is_revealing() {
        ctl.fixed_update(0.05);
        guard += 1;
        assert!(guard < 10_000, "reveal never completed");
    }
}

impl DialogueUi for FakeWorld {
    fn close_all_windows(&mut self, force: bool) -> bool {
        let mut state = self.0.borrow_mut();
        if state.refuse_close && !force {
            return false;
        }
        state.windows_closed += 1;
        state.dialog_window_open = false;
        state.quest_choice = false;
        true
    }

    fn show_dialog_window(&mut self) {
        self.0.borrow_mut().dialog_window_open = true;
    }

    fn set_dialog_text(&mut self, text: &str) {
        self.0.borrow_mut().text = text.to_string();
    }

    fn set_continue_visible(&mut self, visible: bool) {
        self.0.borrow_mut().continue_visible = visible;
    }

    fn set_quest_button_visible(&mut self, visible: bool) {
        self.0.borrow_mut().quest_button = visible;
    }

    fn set_shop_button_visible(&mut self, visible: bool) {
        self.0.borrow_mut().shop_button = visible;
    }

    fn set_quest_choice_visible(&mut self, visible: bool) {
        self.0.borrow_mut().quest_choice = visible;
    }

    fn show_quest_info(&mut self, quest: &str) {
        self.0.borrow_mut().quest_info.push(quest.to_string());
    }
}

impl CameraControl for FakeWorld {
    fn set_rotation_locked(&mut self, locked: bool) {
        self.0.borrow_mut().camera_locked = locked;
    }
}

impl InputModeSwitch for FakeWorld {
    fn switch_mode(&mut self, mode: InputMode) {
        self.0.borrow_mut().input_mode = mode;
    }
}

impl QuestLog for FakeWorld {
    fn is_active(&self, quest: &str) -> bool {
        self.0.borrow().active.iter().any(|q| q == quest)
    }

    fn is_offerable(&self, quest: &str) -> bool {
        self.0.borrow().offerable.iter().any(|q| q == quest)
    }

    fn activate(&mut self, quest: &str) {
        let mut state = self.0.borrow_mut();
        state.activated.push(quest.to_string());
        state.active.push(quest.to_string());
    }
}

impl NpcDirectory for FakeWorld {
    fn profile(&self, npc_id: &str) -> Option<NpcProfile> {
        self.0.borrow().npcs.iter().find(|npc| npc.id == npc_id).cloned()
    }

    fn conversation_started(&mut self, npc_id: &str) {
        self.0
            .borrow_mut()
            .conversations_started
            .push(npc_id.to_string());
    }
}

impl ShopService for FakeWorld {
    fn open_shop(&mut self, category: ShopCategory) {
        self.0.borrow_mut().shops_opened.push(category);
    }
}
