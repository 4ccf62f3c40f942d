//! Effect types
//!
//! Effects describe what an action changed. The engine produces them and the
//! presentation layer consumes them to update its widgets. An action that
//! changed nothing produces no effects.

use crate::entry::{EntryError, EntryField};
use crate::letter::SceneLetter;
use crate::take::TakeMode;
use smallvec::SmallVec;
use std::fmt;

/// Effects produced by a single action
pub type Effects = SmallVec<[Effect; 4]>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    QrOverlay { visible: bool },

    RollChanged { cam: usize, value: u16 },
    CameraSelected { cam: usize },
    NumCamsChanged { num_cams: u8 },

    SceneNumberChanged { number: u16 },
    SceneLetterChanged { letter: Option<SceneLetter> },
    DualModeChanged { enabled: bool },
    PrefixChanged { prefix: u16 },
    EditTargetChanged { editing_prefix: bool },

    TakeNumberChanged { number: u16 },
    TakeModeChanged { mode: TakeMode },

    /// Manual entry failed validation, the dialog should not commit
    EntryRejected { field: EntryField, error: EntryError },
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::QrOverlay { visible: true } => write!(f, "qr overlay shown"),
            Effect::QrOverlay { visible: false } => write!(f, "qr overlay hidden"),
            Effect::RollChanged { cam, value } => {
                write!(f, "roll {}{value:03}", cam_label(*cam))
            }
            Effect::CameraSelected { cam } => write!(f, "camera {} selected", cam_label(*cam)),
            Effect::NumCamsChanged { num_cams } => write!(f, "{num_cams} camera(s)"),
            Effect::SceneNumberChanged { number } => write!(f, "scene {number:03}"),
            Effect::SceneLetterChanged { letter: Some(letter) } => {
                write!(f, "scene letter {letter}")
            }
            Effect::SceneLetterChanged { letter: None } => write!(f, "scene letter cleared"),
            Effect::DualModeChanged { enabled: true } => write!(f, "dual mode on"),
            Effect::DualModeChanged { enabled: false } => write!(f, "dual mode off"),
            Effect::PrefixChanged { prefix } => write!(f, "prefix {prefix:02}"),
            Effect::EditTargetChanged {
                editing_prefix: true,
            } => write!(f, "editing prefix"),
            Effect::EditTargetChanged {
                editing_prefix: false,
            } => write!(f, "editing scene number"),
            Effect::TakeNumberChanged { number } => write!(f, "take {number:02}"),
            Effect::TakeModeChanged { mode } => write!(f, "take mode {mode}"),
            Effect::EntryRejected { field, error } => {
                write!(f, "{field} entry rejected: {error}")
            }
        }
    }
}

/// Camera letter for a roll line (`A`, `B`, ...)
pub fn cam_label(cam: usize) -> char {
    u8::try_from(cam)
        .ok()
        .and_then(|cam| b'A'.checked_add(cam))
        .map(char::from)
        .unwrap_or('?')
}
