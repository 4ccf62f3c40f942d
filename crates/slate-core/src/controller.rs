//! Controller
//!
//! Maps (session context, KeyCommand) → Action. A few keys mean different
//! things depending on the rig or dual mode, that is decided here so the
//! engine only ever sees unambiguous actions.

use crate::action::Action;
use crate::keymap::KeyCommand;
use crate::session::Session;

/// Read-only view of the state that key resolution depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControllerContext {
    pub multi_cam: bool,
    pub dual_mode: bool,
}

impl ControllerContext {
    pub fn from_session(session: &Session) -> Self {
        Self {
            multi_cam: session.cameras().is_multi_cam(),
            dual_mode: session.dual().enabled(),
        }
    }
}

/// Resolve a key command to an action
pub fn handle_key(ctx: &ControllerContext, command: KeyCommand) -> Action {
    match command {
        KeyCommand::QrShow => Action::ShowQrOverlay,
        KeyCommand::QrHide => Action::HideQrOverlay,

        KeyCommand::RollDown => Action::RollDecrement,
        KeyCommand::RollUp => Action::RollIncrement,
        KeyCommand::RollSelect if ctx.multi_cam => Action::CycleCamera,
        KeyCommand::RollSelect => Action::JumpRollToNextHundred,
        KeyCommand::RollAddCamera => Action::AddCamera,

        KeyCommand::SceneUp => Action::IncrementActive,
        KeyCommand::SceneDown => Action::DecrementActive,
        KeyCommand::SceneJump if ctx.dual_mode => Action::ToggleEditTarget,
        KeyCommand::SceneJump => Action::JumpSceneToNextHundred,
        KeyCommand::DualToggle => Action::ToggleDualMode,

        KeyCommand::LetterNext => Action::NextLetter,
        KeyCommand::LetterPrevious => Action::PreviousLetter,
        KeyCommand::LetterToggle => Action::ToggleLetter,
        KeyCommand::LetterReset => Action::ResetLetter,

        KeyCommand::TakeUp => Action::TakeIncrement,
        KeyCommand::TakeDown => Action::TakeDecrement,
        KeyCommand::SeriesToggle => Action::ToggleSeries,
        KeyCommand::TakeReset => Action::ResetTake,
    }
}
