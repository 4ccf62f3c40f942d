//! Dual scene numbering (`PP.SSS`)

use crate::counter::CounterPolicy;
use crate::scene::SceneState;
use serde::Serialize;

/// Which number an increment or decrement landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveField {
    Prefix(u16),
    Scene(u16),
}

/// Dual mode toggle, prefix value and edit target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DualModeController {
    enabled: bool,
    prefix: u16,
    editing_prefix: bool,
}

impl Default for DualModeController {
    fn default() -> Self {
        Self {
            enabled: false,
            prefix: 1,
            editing_prefix: false,
        }
    }
}

impl DualModeController {
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn prefix(&self) -> u16 {
        self.prefix
    }

    pub fn editing_prefix(&self) -> bool {
        self.editing_prefix
    }

    /// True when increments should go to the prefix instead of the scene
    pub fn edits_prefix(&self) -> bool {
        self.enabled && self.editing_prefix
    }

    /// Flip dual mode, returns the new state
    ///
    /// Entering always starts from prefix 1 with the prefix selected.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        if self.enabled {
            self.prefix = 1;
            self.editing_prefix = true;
        }
        self.enabled
    }

    /// Swap the edit target between prefix and scene number
    ///
    /// Returns the new `editing_prefix` value, or `None` outside dual mode.
    pub fn toggle_editing_target(&mut self) -> Option<bool> {
        if !self.enabled {
            return None;
        }
        self.editing_prefix = !self.editing_prefix;
        Some(self.editing_prefix)
    }

    /// Increment whichever number is being edited
    ///
    /// Returns `None` when the target was already at its ceiling.
    pub fn increment_active(&mut self, scene: &mut SceneState) -> Option<ActiveField> {
        if self.edits_prefix() {
            let next = CounterPolicy::PREFIX.increment(self.prefix);
            self.set_prefix(next).map(ActiveField::Prefix)
        } else {
            scene.increment().map(ActiveField::Scene)
        }
    }

    /// Decrement whichever number is being edited
    pub fn decrement_active(&mut self, scene: &mut SceneState) -> Option<ActiveField> {
        if self.edits_prefix() {
            let next = CounterPolicy::PREFIX.decrement(self.prefix);
            self.set_prefix(next).map(ActiveField::Prefix)
        } else {
            scene.decrement().map(ActiveField::Scene)
        }
    }

    fn set_prefix(&mut self, prefix: u16) -> Option<u16> {
        if prefix == self.prefix {
            return None;
        }
        self.prefix = prefix;
        Some(prefix)
    }

    /// Two digit prefix as displayed
    pub fn display_prefix(&self) -> String {
        format!("{:02}", self.prefix)
    }
}
