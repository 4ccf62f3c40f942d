//! Take number and take mode

use crate::counter::CounterPolicy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How the current take is logged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TakeMode {
    #[default]
    Normal,
    Series,
    OnlySeries,
    Rehearsal,
    Plate,
}

impl TakeMode {
    /// Full cycle: normal → series → rehearsal → plate → only series → normal
    pub fn next(self) -> Self {
        match self {
            TakeMode::Normal => TakeMode::Series,
            TakeMode::Series => TakeMode::Rehearsal,
            TakeMode::Rehearsal => TakeMode::Plate,
            TakeMode::Plate => TakeMode::OnlySeries,
            TakeMode::OnlySeries => TakeMode::Normal,
        }
    }

    /// Label shown under the take number, if any
    pub fn label(self) -> Option<&'static str> {
        match self {
            TakeMode::Normal => None,
            TakeMode::Series | TakeMode::OnlySeries => Some("SERIES"),
            TakeMode::Rehearsal => Some("REHEARSE"),
            TakeMode::Plate => Some("PLATE"),
        }
    }
}

impl fmt::Display for TakeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TakeMode::Normal => "normal",
            TakeMode::Series => "series",
            TakeMode::OnlySeries => "only series",
            TakeMode::Rehearsal => "rehearsal",
            TakeMode::Plate => "plate",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TakeState {
    number: u16,
    mode: TakeMode,
}

impl Default for TakeState {
    fn default() -> Self {
        Self {
            number: 1,
            mode: TakeMode::Normal,
        }
    }
}

impl TakeState {
    pub fn number(&self) -> u16 {
        self.number
    }

    pub fn mode(&self) -> TakeMode {
        self.mode
    }

    pub fn increment(&mut self) -> Option<u16> {
        self.write_number(CounterPolicy::SLATE.increment(self.number))
    }

    pub fn decrement(&mut self) -> Option<u16> {
        self.write_number(CounterPolicy::SLATE.decrement(self.number))
    }

    pub fn set_number(&mut self, number: u16) -> Option<u16> {
        let policy = CounterPolicy::SLATE;
        self.write_number(number.clamp(policy.min, policy.max))
    }

    fn write_number(&mut self, number: u16) -> Option<u16> {
        if number == self.number {
            return None;
        }
        self.number = number;
        Some(number)
    }

    /// Advance one step through every mode
    pub fn cycle(&mut self) -> TakeMode {
        self.mode = self.mode.next();
        self.mode
    }

    /// Flip between normal and series only
    ///
    /// Any mode other than series goes to series.
    pub fn toggle_series(&mut self) -> TakeMode {
        self.mode = match self.mode {
            TakeMode::Series => TakeMode::Normal,
            _ => TakeMode::Series,
        };
        self.mode
    }

    /// Back to take 1, a running series ends with it
    ///
    /// Returns the new number and mode for whichever of them changed.
    pub fn reset_take_number(&mut self) -> (Option<u16>, Option<TakeMode>) {
        let number = self.write_number(1);
        let mode = if self.mode == TakeMode::Series {
            self.mode = TakeMode::Normal;
            Some(self.mode)
        } else {
            None
        };
        (number, mode)
    }

    pub fn set_mode(&mut self, mode: TakeMode) -> Option<TakeMode> {
        if mode == self.mode {
            return None;
        }
        self.mode = mode;
        Some(mode)
    }

    /// Two digit take number, or `SERIES` alone in only-series mode
    pub fn display(&self) -> String {
        match self.mode {
            TakeMode::OnlySeries => "SERIES".to_string(),
            mode => match mode.label() {
                Some(label) => format!("{:02} {label}", self.number),
                None => format!("{:02}", self.number),
            },
        }
    }
}
