//! NPC Targeting
//!
//! Tracks which NPC the player may currently talk to. Proximity zones can
//! overlap, so assignments are reference-counted: the NPC stays targeted
//! until every assignment has been released.

use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Targeting {
    current: Option<String>,
    assigned: u32,
}

impl Targeting {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one more assignment for `npc_id`.
    ///
    /// Returns `true` when this assignment made the NPC the current target.
    pub fn assign(&mut self, npc_id: &str) -> bool {
        self.assigned += 1;
        if self.assigned == 1 {
            debug!("Targeting NPC {}", npc_id);
            self.current = Some(npc_id.to_string());
            true
        } else {
            false
        }
    }

    /// Release one assignment.
    ///
    /// Returns `true` when the last assignment was released and the target
    /// cleared. Releasing with nothing assigned is a no-op.
    pub fn unassign(&mut self) -> bool {
        if self.assigned == 0 {
            return false;
        }
        self.assigned -= 1;
        if self.assigned == 0 {
            debug!("Cleared NPC target {:?}", self.current);
            self.current = None;
            true
        } else {
            false
        }
    }

    /// Currently targeted NPC, if any
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn assigned(&self) -> u32 {
        self.assigned
    }
}
