//! Collaborator Interfaces
//!
//! Everything the conversation engine touches outside itself: widgets,
//! camera, input mode, quest status, NPC data and shops. Implementations are
//! handed to the controller at construction.

use crate::npc::NpcProfile;

/// Global input mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Gameplay,
    Conversation,
}

/// Which shop an NPC opens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopCategory {
    /// Consumables and general goods
    Props,
    Equipment,
}

/// Dialogue window widgets
#[cfg_attr(test, mockall::automock)]
pub trait DialogueUi {
    /// Close every open window. Returns `false` if a window refused to close.
    fn close_all_windows(&mut self, force: bool) -> bool;
    fn show_dialog_window(&mut self);
    fn set_dialog_text(&mut self, text: &str);
    fn set_continue_visible(&mut self, visible: bool);
    fn set_quest_button_visible(&mut self, visible: bool);
    fn set_shop_button_visible(&mut self, visible: bool);
    /// Accept/decline buttons
    fn set_quest_choice_visible(&mut self, visible: bool);
    fn show_quest_info(&mut self, quest: &str);
}

#[cfg_attr(test, mockall::automock)]
pub trait CameraControl {
    fn set_rotation_locked(&mut self, locked: bool);
}

#[cfg_attr(test, mockall::automock)]
pub trait InputModeSwitch {
    fn switch_mode(&mut self, mode: InputMode);
}

/// Player quest status
#[cfg_attr(test, mockall::automock)]
pub trait QuestLog {
    /// Quest already accepted and in progress
    fn is_active(&self, quest: &str) -> bool;
    /// Quest can be offered right now
    fn is_offerable(&self, quest: &str) -> bool;
    fn activate(&mut self, quest: &str);
}

#[cfg_attr(test, mockall::automock)]
pub trait NpcDirectory {
    fn profile(&self, npc_id: &str) -> Option<NpcProfile>;

    /// Called when a conversation with `npc_id` opens
    fn conversation_started(&mut self, _npc_id: &str) {}
}

#[cfg_attr(test, mockall::automock)]
pub trait ShopService {
    fn open_shop(&mut self, category: ShopCategory);
}

/// Collaborators owned by the conversation controller
pub struct DialogueServices {
    pub ui: Box<dyn DialogueUi>,
    pub camera: Box<dyn CameraControl>,
    pub input: Box<dyn InputModeSwitch>,
    pub quests: Box<dyn QuestLog>,
    pub npcs: Box<dyn NpcDirectory>,
    pub shop: Box<dyn ShopService>,
}

impl DialogueServices {
    pub fn new(
        ui: impl DialogueUi + 'static,
        camera: impl CameraControl + 'static,
        input: impl InputModeSwitch + 'static,
        quests: impl QuestLog + 'static,
        npcs: impl NpcDirectory + 'static,
        shop: impl ShopService + 'static,
    ) -> Self {
        Self {
            ui: Box::new(ui),
            camera: Box::new(camera),
            input: Box::new(input),
            quests: Box::new(quests),
            npcs: Box::new(npcs),
            shop: Box::new(shop),
        }
    }
}
