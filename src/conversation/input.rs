//! Conversation input events (press-start edges only)

/// Bound input actions consumed by the conversation engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Start talking to the targeted NPC
    Conversation,
    /// Skip the reveal or advance to the next line
    ContinueDialogue,
    /// Force-close the conversation
    CloseDialogue,
}

/// Dialogue window buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogButton {
    Continue,
    Rewind,
    Quest,
    Shop,
    Exit,
    AcceptQuest,
    DeclineQuest,
}
