//! Session state
//!
//! One slate screen owns one session for as long as it is mounted. Nothing
//! is shared between sessions and nothing is persisted.

use crate::camera::CameraMultiplexer;
use crate::counter::SceneOverflow;
use crate::dual::DualModeController;
use crate::scene::SceneState;
use crate::take::TakeState;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Session {
    pub(crate) qr_visible: bool,
    pub(crate) cameras: CameraMultiplexer,
    pub(crate) scene: SceneState,
    pub(crate) dual: DualModeController,
    pub(crate) take: TakeState,
}

impl Session {
    pub fn new(overflow: SceneOverflow) -> Self {
        Self {
            scene: SceneState::with_overflow(overflow),
            ..Default::default()
        }
    }

    pub fn cameras(&self) -> &CameraMultiplexer {
        &self.cameras
    }

    pub fn scene(&self) -> &SceneState {
        &self.scene
    }

    pub fn dual(&self) -> &DualModeController {
        &self.dual
    }

    pub fn take(&self) -> &TakeState {
        &self.take
    }

    pub fn qr_visible(&self) -> bool {
        self.qr_visible
    }

    /// Scene field as displayed, `PP.SSS` in dual mode
    pub fn scene_display(&self) -> String {
        if self.dual.enabled() {
            format!("{}.{}", self.dual.display_prefix(), self.scene.display())
        } else {
            self.scene.display()
        }
    }

    /// Two digit camera count, the raw value even past the visible four
    pub fn display_num_cams(&self) -> String {
        self.cameras.display_num_cams()
    }

    /// Roll lines as displayed, the selected one marked when several are shown
    pub fn roll_display(&self) -> String {
        let multi = self.cameras.is_multi_cam();
        self.cameras
            .visible_rolls()
            .enumerate()
            .map(|(i, (label, roll))| {
                let marker = if multi && i == self.cameras.current_cam() {
                    ">"
                } else {
                    ""
                };
                format!("{marker}{label}{roll:03}")
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// One line summary of every field
    pub fn summary(&self) -> String {
        format!(
            "ROLL {} ({} cam) | SCENE {} | TAKE {}{}",
            self.roll_display(),
            self.display_num_cams(),
            self.scene_display(),
            self.take.display(),
            if self.qr_visible { " | QR" } else { "" },
        )
    }
}
