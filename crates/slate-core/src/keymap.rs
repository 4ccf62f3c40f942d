//! Keystroke table
//!
//! The keypad emits single characters. Each character maps to one
//! [`KeyCommand`], which the controller then resolves against the session
//! into an [`Action`](crate::Action).

use ahash::{HashMap, HashMapExt};
use serde::{Deserialize, Serialize};

/// One row of the key table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCommand {
    QrShow,
    QrHide,
    RollDown,
    RollUp,
    /// Next camera with several cameras, next hundred with one
    RollSelect,
    RollAddCamera,
    SceneUp,
    SceneDown,
    /// Edit target toggle in dual mode, next hundred otherwise
    SceneJump,
    DualToggle,
    LetterNext,
    LetterPrevious,
    LetterToggle,
    LetterReset,
    TakeUp,
    TakeDown,
    SeriesToggle,
    TakeReset,
}

impl KeyCommand {
    pub const ALL: [KeyCommand; 18] = [
        KeyCommand::QrShow,
        KeyCommand::QrHide,
        KeyCommand::RollDown,
        KeyCommand::RollUp,
        KeyCommand::RollSelect,
        KeyCommand::RollAddCamera,
        KeyCommand::SceneUp,
        KeyCommand::SceneDown,
        KeyCommand::SceneJump,
        KeyCommand::DualToggle,
        KeyCommand::LetterNext,
        KeyCommand::LetterPrevious,
        KeyCommand::LetterToggle,
        KeyCommand::LetterReset,
        KeyCommand::TakeUp,
        KeyCommand::TakeDown,
        KeyCommand::SeriesToggle,
        KeyCommand::TakeReset,
    ];

    /// Name used for the command in configuration files
    pub fn name(self) -> &'static str {
        match self {
            KeyCommand::QrShow => "qr_show",
            KeyCommand::QrHide => "qr_hide",
            KeyCommand::RollDown => "roll_down",
            KeyCommand::RollUp => "roll_up",
            KeyCommand::RollSelect => "roll_select",
            KeyCommand::RollAddCamera => "roll_add_camera",
            KeyCommand::SceneUp => "scene_up",
            KeyCommand::SceneDown => "scene_down",
            KeyCommand::SceneJump => "scene_jump",
            KeyCommand::DualToggle => "dual_toggle",
            KeyCommand::LetterNext => "letter_next",
            KeyCommand::LetterPrevious => "letter_previous",
            KeyCommand::LetterToggle => "letter_toggle",
            KeyCommand::LetterReset => "letter_reset",
            KeyCommand::TakeUp => "take_up",
            KeyCommand::TakeDown => "take_down",
            KeyCommand::SeriesToggle => "series_toggle",
            KeyCommand::TakeReset => "take_reset",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            KeyCommand::QrShow => "show full-screen code",
            KeyCommand::QrHide => "hide full-screen code",
            KeyCommand::RollDown => "roll down (selected camera)",
            KeyCommand::RollUp => "roll up (selected camera)",
            KeyCommand::RollSelect => "next camera / roll to next hundred",
            KeyCommand::RollAddCamera => "add camera (wraps after 4)",
            KeyCommand::SceneUp => "scene up / prefix up",
            KeyCommand::SceneDown => "scene down / prefix down",
            KeyCommand::SceneJump => "scene to next hundred / swap dual edit target",
            KeyCommand::DualToggle => "dual scene numbering on/off",
            KeyCommand::LetterNext => "next scene letter",
            KeyCommand::LetterPrevious => "previous scene letter",
            KeyCommand::LetterToggle => "scene letter on/off",
            KeyCommand::LetterReset => "scene letter to A",
            KeyCommand::TakeUp => "take up",
            KeyCommand::TakeDown => "take down",
            KeyCommand::SeriesToggle => "series on/off",
            KeyCommand::TakeReset => "take to 1, ends series",
        }
    }
}

/// Keypad layout out of the box
pub const DEFAULT_BINDINGS: &[(char, KeyCommand)] = &[
    ('[', KeyCommand::QrShow),
    (']', KeyCommand::QrHide),
    // encoder 1
    ('e', KeyCommand::RollDown),
    ('t', KeyCommand::RollUp),
    ('r', KeyCommand::RollSelect),
    ('R', KeyCommand::RollAddCamera),
    // encoder 2
    ('d', KeyCommand::SceneUp),
    ('a', KeyCommand::SceneDown),
    ('s', KeyCommand::SceneJump),
    ('S', KeyCommand::DualToggle),
    // encoder 3
    ('c', KeyCommand::LetterNext),
    ('z', KeyCommand::LetterPrevious),
    ('x', KeyCommand::LetterToggle),
    ('X', KeyCommand::LetterReset),
    // encoder 4
    ('l', KeyCommand::TakeUp),
    ('j', KeyCommand::TakeDown),
    ('k', KeyCommand::SeriesToggle),
    ('K', KeyCommand::TakeReset),
];

/// Case-sensitive character to command lookup
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: HashMap<char, KeyCommand>,
}

impl Default for Keymap {
    fn default() -> Self {
        let mut bindings = HashMap::with_capacity(DEFAULT_BINDINGS.len());
        bindings.extend(DEFAULT_BINDINGS.iter().copied());
        Self { bindings }
    }
}

impl Keymap {
    pub fn lookup(&self, key: char) -> Option<KeyCommand> {
        self.bindings.get(&key).copied()
    }

    /// Bind a key, returning what it was bound to before
    pub fn bind(&mut self, key: char, command: KeyCommand) -> Option<KeyCommand> {
        self.bindings.insert(key, command)
    }

    pub fn bindings(&self) -> impl Iterator<Item = (char, KeyCommand)> + '_ {
        self.bindings.iter().map(|(&key, &command)| (key, command))
    }
}
