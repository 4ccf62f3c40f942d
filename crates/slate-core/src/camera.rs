//! Camera selection and per-camera roll numbers

use crate::counter::{CounterPolicy, next_hundred};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use smallvec::{SmallVec, smallvec};

/// The rig size that `R` cycles through before wrapping back to one camera
pub const MAX_RIG_CAMS: u8 = 4;

/// Roll lines the slate has room to show
pub const VISIBLE_ROLLS: usize = 4;

/// Owns the roll list and which camera keystrokes are aimed at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraMultiplexer {
    rolls: SmallVec<[u16; 4]>,
    num_cams: u8,
    current_cam: usize,
}

impl Default for CameraMultiplexer {
    fn default() -> Self {
        Self {
            rolls: smallvec![1, 1],
            num_cams: 1,
            current_cam: 0,
        }
    }
}

// only the active cameras' rolls are part of the visible state
impl Serialize for CameraMultiplexer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("CameraMultiplexer", 3)?;
        state.serialize_field("rolls", self.rolls())?;
        state.serialize_field("num_cams", &self.num_cams)?;
        state.serialize_field("current_cam", &self.current_cam)?;
        state.end()
    }
}

impl CameraMultiplexer {
    /// Roll values for the active cameras
    pub fn rolls(&self) -> &[u16] {
        let len = self.rolls.len().min(self.num_cams as usize);
        &self.rolls[..len]
    }

    pub fn roll(&self, cam: usize) -> Option<u16> {
        self.rolls().get(cam).copied()
    }

    pub fn num_cams(&self) -> u8 {
        self.num_cams
    }

    /// Only meaningful when more than one camera is active
    pub fn current_cam(&self) -> usize {
        self.current_cam
    }

    pub fn is_multi_cam(&self) -> bool {
        self.num_cams > 1
    }

    /// Increment a camera's roll, returns the new value if it moved
    pub fn increment(&mut self, cam: usize) -> Option<u16> {
        let value = self.roll(cam)?;
        self.write_roll(cam, CounterPolicy::SLATE.increment(value))
    }

    /// Decrement a camera's roll, returns the new value if it moved
    pub fn decrement(&mut self, cam: usize) -> Option<u16> {
        let value = self.roll(cam)?;
        self.write_roll(cam, CounterPolicy::SLATE.decrement(value))
    }

    pub fn jump_to_next_hundred(&mut self, cam: usize) -> Option<u16> {
        let value = self.roll(cam)?;
        self.write_roll(cam, next_hundred(value))
    }

    /// Overwrite a roll value, clamped into range
    pub fn set_roll(&mut self, cam: usize, value: u16) -> Option<u16> {
        self.roll(cam)?;
        let policy = CounterPolicy::SLATE;
        self.write_roll(cam, value.clamp(policy.min, policy.max))
    }

    fn write_roll(&mut self, cam: usize, value: u16) -> Option<u16> {
        let slot = self.rolls.get_mut(cam)?;
        if *slot == value {
            return None;
        }
        *slot = value;
        Some(value)
    }

    /// Aim at the next camera, wrapping around. No-op with a single camera.
    pub fn cycle_camera(&mut self) -> Option<usize> {
        if !self.is_multi_cam() {
            return None;
        }
        self.current_cam = (self.current_cam + 1) % self.num_cams as usize;
        Some(self.current_cam)
    }

    /// Aim at a specific camera, returns it if the selection changed
    pub fn select_camera(&mut self, cam: usize) -> Option<usize> {
        if cam >= self.num_cams as usize || cam == self.current_cam {
            return None;
        }
        self.current_cam = cam;
        Some(cam)
    }

    /// Grow the rig by one camera, going back to a single camera after
    /// [`MAX_RIG_CAMS`]
    pub fn change_num_cams(&mut self) -> u8 {
        let grown = self.num_cams.saturating_add(1);
        if grown > MAX_RIG_CAMS {
            self.current_cam = 0;
            self.resize(1);
        } else {
            self.resize(grown);
        }
        self.num_cams
    }

    /// Set the camera count from manual entry
    ///
    /// Counts above [`MAX_RIG_CAMS`] are allowed, only the first
    /// [`VISIBLE_ROLLS`] are ever shown.
    pub fn set_num_cams(&mut self, num_cams: u8) -> Option<u8> {
        let policy = CounterPolicy::NUM_CAMS;
        let num_cams = (num_cams as u16).clamp(policy.min, policy.max) as u8;
        if num_cams == self.num_cams {
            return None;
        }
        self.resize(num_cams);
        Some(num_cams)
    }

    fn resize(&mut self, num_cams: u8) {
        self.num_cams = num_cams;
        // new cameras start at roll 1, dropped ones are discarded
        self.rolls.resize(num_cams as usize, 1);
        if self.current_cam >= num_cams as usize {
            self.current_cam = num_cams as usize - 1;
        }
    }

    /// Labelled roll lines as the slate shows them (`A001`, `B012`, ...)
    pub fn visible_rolls(&self) -> impl Iterator<Item = (char, u16)> + '_ {
        self.rolls()
            .iter()
            .take(VISIBLE_ROLLS)
            .enumerate()
            .map(|(i, &roll)| (char::from(b'A' + i as u8), roll))
    }

    /// Two digit camera count
    pub fn display_num_cams(&self) -> String {
        format!("{:02}", self.num_cams)
    }
}
