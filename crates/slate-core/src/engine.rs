//! Engine
//!
//! Applies actions to the session and reports what changed. This is the only
//! code that mutates a [`Session`]. It performs no IO.

use crate::action::Action;
use crate::dual::ActiveField;
use crate::effect::{Effect, Effects};
use crate::entry::{self, EntryError, EntryField};
use crate::session::Session;
use log::debug;

/// Process an action and return its effects
pub fn reduce(session: &mut Session, action: Action) -> Effects {
    let mut effects = Effects::new();

    match action {
        // QR overlay
        Action::ShowQrOverlay => set_qr_visible(session, true, &mut effects),
        Action::HideQrOverlay => set_qr_visible(session, false, &mut effects),

        // Roll
        Action::RollIncrement => {
            let cam = session.cameras.current_cam();
            if let Some(value) = session.cameras.increment(cam) {
                effects.push(Effect::RollChanged { cam, value });
            }
        }
        Action::RollDecrement => {
            let cam = session.cameras.current_cam();
            if let Some(value) = session.cameras.decrement(cam) {
                effects.push(Effect::RollChanged { cam, value });
            }
        }
        Action::CycleCamera => {
            if let Some(cam) = session.cameras.cycle_camera() {
                effects.push(Effect::CameraSelected { cam });
            }
        }
        Action::JumpRollToNextHundred => {
            let cam = session.cameras.current_cam();
            if let Some(value) = session.cameras.jump_to_next_hundred(cam) {
                effects.push(Effect::RollChanged { cam, value });
            }
        }
        Action::AddCamera => {
            let before = session.cameras.current_cam();
            let num_cams = session.cameras.change_num_cams();
            effects.push(Effect::NumCamsChanged { num_cams });
            let cam = session.cameras.current_cam();
            if cam != before {
                effects.push(Effect::CameraSelected { cam });
            }
        }
        Action::RollTapIncrement(cam) => {
            if let Some(value) = session.cameras.increment(cam) {
                effects.push(Effect::RollChanged { cam, value });
            }
        }
        Action::RollTapDecrement(cam) => {
            if let Some(value) = session.cameras.decrement(cam) {
                effects.push(Effect::RollChanged { cam, value });
            }
        }
        Action::SelectCamera(cam) => {
            if let Some(cam) = session.cameras.select_camera(cam) {
                effects.push(Effect::CameraSelected { cam });
            }
        }
        Action::SetRoll { cam, value } => {
            if let Some(value) = session.cameras.set_roll(cam, value) {
                effects.push(Effect::RollChanged { cam, value });
            }
        }
        Action::ResetRoll(cam) => {
            if let Some(value) = session.cameras.set_roll(cam, 1) {
                effects.push(Effect::RollChanged { cam, value });
            }
        }

        // Scene number
        Action::IncrementActive => {
            let changed = session.dual.increment_active(&mut session.scene);
            push_active_field(changed, &mut effects);
        }
        Action::DecrementActive => {
            let changed = session.dual.decrement_active(&mut session.scene);
            push_active_field(changed, &mut effects);
        }
        Action::SceneIncrement => {
            if let Some(number) = session.scene.increment() {
                effects.push(Effect::SceneNumberChanged { number });
            }
        }
        Action::SceneDecrement => {
            if let Some(number) = session.scene.decrement() {
                effects.push(Effect::SceneNumberChanged { number });
            }
        }
        Action::JumpSceneToNextHundred => {
            if let Some(number) = session.scene.jump_to_next_hundred() {
                effects.push(Effect::SceneNumberChanged { number });
            }
        }
        Action::ToggleDualMode => {
            let enabled = session.dual.toggle();
            effects.push(Effect::DualModeChanged { enabled });
            // entering always reports the reset prefix and edit target
            if enabled {
                effects.push(Effect::PrefixChanged {
                    prefix: session.dual.prefix(),
                });
                effects.push(Effect::EditTargetChanged {
                    editing_prefix: session.dual.editing_prefix(),
                });
            }
        }
        Action::ToggleEditTarget => {
            if let Some(editing_prefix) = session.dual.toggle_editing_target() {
                effects.push(Effect::EditTargetChanged { editing_prefix });
            }
        }

        // Scene letter
        Action::NextLetter => {
            if session.scene.advance_letter() {
                push_letter(session, &mut effects);
            }
        }
        Action::PreviousLetter => {
            if session.scene.retreat_letter() {
                push_letter(session, &mut effects);
            }
        }
        Action::ToggleLetter => {
            if session.scene.toggle_letter() {
                push_letter(session, &mut effects);
            }
        }
        Action::ResetLetter => {
            if session.scene.reset_letter() {
                push_letter(session, &mut effects);
            }
        }
        Action::SetSceneLetter(letter) => {
            if session.scene.set_letter(letter) {
                push_letter(session, &mut effects);
            }
        }

        // Take
        Action::TakeIncrement => {
            if let Some(number) = session.take.increment() {
                effects.push(Effect::TakeNumberChanged { number });
            }
        }
        Action::TakeDecrement => {
            if let Some(number) = session.take.decrement() {
                effects.push(Effect::TakeNumberChanged { number });
            }
        }
        Action::ToggleSeries => {
            let mode = session.take.toggle_series();
            effects.push(Effect::TakeModeChanged { mode });
        }
        Action::ResetTake => {
            let (number, mode) = session.take.reset_take_number();
            if let Some(number) = number {
                effects.push(Effect::TakeNumberChanged { number });
            }
            if let Some(mode) = mode {
                effects.push(Effect::TakeModeChanged { mode });
            }
        }
        Action::CycleTakeMode => {
            let mode = session.take.cycle();
            effects.push(Effect::TakeModeChanged { mode });
        }
        Action::SetTakeNumber(number) => {
            if let Some(number) = session.take.set_number(number) {
                effects.push(Effect::TakeNumberChanged { number });
            }
        }

        // Edit dialogs
        Action::EnterRoll { cam, text } => {
            match entry::parse_number(EntryField::Roll, &text) {
                Ok(value) => {
                    if let Some(value) = session.cameras.set_roll(cam, value) {
                        effects.push(Effect::RollChanged { cam, value });
                    }
                }
                Err(error) => reject(EntryField::Roll, error, &mut effects),
            }
        }
        Action::EnterNumCams(text) => match entry::parse_number(EntryField::NumCams, &text) {
            Ok(num_cams) => {
                let before = session.cameras.current_cam();
                // NUM_CAMS tops out at 99 so the narrowing is lossless
                if let Some(num_cams) = session.cameras.set_num_cams(num_cams as u8) {
                    effects.push(Effect::NumCamsChanged { num_cams });
                }
                let cam = session.cameras.current_cam();
                if cam != before {
                    effects.push(Effect::CameraSelected { cam });
                }
            }
            Err(error) => reject(EntryField::NumCams, error, &mut effects),
        },
        Action::EnterSceneNumber(text) => {
            match entry::parse_number(EntryField::SceneNumber, &text) {
                Ok(number) => {
                    if let Some(number) = session.scene.set_number(number) {
                        effects.push(Effect::SceneNumberChanged { number });
                    }
                }
                Err(error) => reject(EntryField::SceneNumber, error, &mut effects),
            }
        }
        Action::EnterSceneLetter(text) => match entry::parse_letter(&text) {
            Ok(letter) => {
                if session.scene.set_letter(letter) {
                    push_letter(session, &mut effects);
                }
            }
            Err(error) => reject(EntryField::SceneLetter, error, &mut effects),
        },
        Action::EnterTakeNumber(text) => {
            match entry::parse_number(EntryField::TakeNumber, &text) {
                Ok(number) => {
                    if let Some(number) = session.take.set_number(number) {
                        effects.push(Effect::TakeNumberChanged { number });
                    }
                }
                Err(error) => reject(EntryField::TakeNumber, error, &mut effects),
            }
        }
    }

    effects
}

fn set_qr_visible(session: &mut Session, visible: bool, effects: &mut Effects) {
    if session.qr_visible != visible {
        session.qr_visible = visible;
        effects.push(Effect::QrOverlay { visible });
    }
}

fn push_active_field(changed: Option<ActiveField>, effects: &mut Effects) {
    match changed {
        Some(ActiveField::Prefix(prefix)) => effects.push(Effect::PrefixChanged { prefix }),
        Some(ActiveField::Scene(number)) => effects.push(Effect::SceneNumberChanged { number }),
        None => {}
    }
}

fn push_letter(session: &Session, effects: &mut Effects) {
    effects.push(Effect::SceneLetterChanged {
        letter: session.scene.letter(),
    });
}

fn reject(field: EntryField, error: EntryError, effects: &mut Effects) {
    debug!("rejected {field} entry: {error}");
    effects.push(Effect::EntryRejected { field, error });
}
