//! Script Player
//!
//! Borrowed view over the script store, reveal engine, session and dialogue
//! widgets. Plain dialogue and quest branches both advance lines through it.

use std::sync::Arc;

use super::session::ConversationSession;
use crate::error::Result;
use crate::reveal::{RevealEngine, RevealStep};
use crate::script::{DialogScript, ScriptStore};
use crate::services::DialogueUi;

pub struct ScriptPlayer<'a> {
    pub scripts: &'a ScriptStore,
    pub reveal: &'a mut RevealEngine,
    pub session: &'a mut ConversationSession,
    pub ui: &'a mut dyn DialogueUi,
}

impl<'a> ScriptPlayer<'a> {
    pub fn new(
        scripts: &'a ScriptStore,
        reveal: &'a mut RevealEngine,
        session: &'a mut ConversationSession,
        ui: &'a mut dyn DialogueUi,
    ) -> Self {
        Self {
            scripts,
            reveal,
            session,
            ui,
        }
    }

    /// Switch to `key` and reveal its first line.
    ///
    /// The key is resolved before anything changes, so a missing key leaves
    /// the session and window untouched.
    pub fn begin(&mut self, key: &str) -> Result<()> {
        let script = self.scripts.lookup(key)?;
        self.begin_script(script);
        Ok(())
    }

    pub fn begin_script(&mut self, script: Arc<DialogScript>) {
        self.session.begin_script(script);
        self.reveal_next();
    }

    /// Skip the running reveal, or start the next line once it has finished
    pub fn advance(&mut self) {
        if self.reveal.skip_to_end() {
            self.settle();
        } else {
            self.reveal_next();
        }
    }

    /// Start revealing the next line. Returns `false` if none remain.
    fn reveal_next(&mut self) -> bool {
        match self.session.next_line() {
            Some(line) => {
                self.reveal.start(&line);
                self.ui.set_dialog_text("");
                self.ui.set_continue_visible(false);
                true
            }
            None => false,
        }
    }

    /// Show the completed line and offer continue if more lines follow
    fn settle(&mut self) {
        self.ui.set_dialog_text(self.reveal.output());
        self.ui.set_continue_visible(self.session.has_more_lines());
    }

    pub fn tick(&mut self, dt: f32) -> RevealStep {
        let step = self.reveal.tick(dt);
        match step {
            RevealStep::Advanced => self.ui.set_dialog_text(self.reveal.output()),
            RevealStep::Completed => self.settle(),
            RevealStep::Idle | RevealStep::Waiting => {}
        }
        step
    }

    /// Line fully shown and nothing left to reveal
    pub fn is_exhausted(&self) -> bool {
        !self.reveal.is_revealing() && !self.session.has_more_lines()
    }
}
