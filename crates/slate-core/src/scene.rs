//! Scene number and letter suffix

use crate::counter::{CounterPolicy, SceneOverflow, next_hundred};
use crate::letter::{self, SceneLetter};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SceneState {
    number: u16,
    letter: Option<SceneLetter>,
    /// Restored by the letter toggle, tracks the last letter stepped to
    last_used: SceneLetter,
    #[serde(skip)]
    overflow: SceneOverflow,
}

impl Default for SceneState {
    fn default() -> Self {
        Self::with_overflow(SceneOverflow::default())
    }
}

impl SceneState {
    pub fn with_overflow(overflow: SceneOverflow) -> Self {
        Self {
            number: 1,
            letter: None,
            last_used: SceneLetter::A,
            overflow,
        }
    }

    pub fn number(&self) -> u16 {
        self.number
    }

    pub fn letter(&self) -> Option<SceneLetter> {
        self.letter
    }

    pub fn last_used_letter(&self) -> SceneLetter {
        self.last_used
    }

    pub fn overflow(&self) -> SceneOverflow {
        self.overflow
    }

    pub fn increment(&mut self) -> Option<u16> {
        self.write_number(self.overflow.increment(self.number))
    }

    pub fn decrement(&mut self) -> Option<u16> {
        self.write_number(self.overflow.decrement(self.number))
    }

    pub fn jump_to_next_hundred(&mut self) -> Option<u16> {
        self.write_number(next_hundred(self.number))
    }

    /// Overwrite the number, clamped into range
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

    /// Step the suffix forward, returns true if it changed
    pub fn advance_letter(&mut self) -> bool {
        let next = letter::next_letter(self.letter);
        self.last_used = next.without_secondary();
        self.write_letter(Some(next))
    }

    /// Step the suffix back, clearing it after a lone `A`
    pub fn retreat_letter(&mut self) -> bool {
        let prev = letter::previous_letter(self.letter);
        if let Some(prev) = prev {
            self.last_used = prev.without_secondary();
        }
        self.write_letter(prev)
    }

    /// Clear the suffix, or bring back the last used letter if there is none
    pub fn toggle_letter(&mut self) -> bool {
        let next = match self.letter {
            Some(_) => None,
            None => Some(self.last_used),
        };
        self.write_letter(next)
    }

    /// Force the suffix to a lone `A`
    pub fn reset_letter(&mut self) -> bool {
        self.last_used = SceneLetter::A;
        self.write_letter(Some(SceneLetter::A))
    }

    /// Set the suffix directly, as from an edit dialog
    pub fn set_letter(&mut self, letter: Option<SceneLetter>) -> bool {
        self.write_letter(letter)
    }

    fn write_letter(&mut self, letter: Option<SceneLetter>) -> bool {
        if letter == self.letter {
            return false;
        }
        self.letter = letter;
        true
    }

    /// Three digit scene number followed by any suffix (`012Aa`)
    pub fn display(&self) -> String {
        match self.letter {
            Some(letter) => format!("{:03}{letter}", self.number),
            None => format!("{:03}", self.number),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_restores_last_used_letter() {
        let mut scene = SceneState::default();

        assert!(scene.toggle_letter());
        assert_eq!(scene.letter(), Some(SceneLetter::A));

        scene.advance_letter();
        scene.advance_letter();
        assert_eq!(scene.letter(), SceneLetter::single('C'));

        assert!(scene.toggle_letter());
        assert_eq!(scene.letter(), None);
        assert_eq!(scene.last_used_letter(), SceneLetter::single('C').unwrap());

        assert!(scene.toggle_letter());
        assert_eq!(scene.letter(), SceneLetter::single('C'));
    }

    #[test]
    fn test_toggle_drops_secondary() {
        let mut scene = SceneState::default();
        scene.set_letter(SceneLetter::single('Z'));
        scene.advance_letter();
        assert_eq!(scene.letter(), SceneLetter::new('A', Some('a')));

        scene.toggle_letter();
        scene.toggle_letter();
        assert_eq!(scene.letter(), Some(SceneLetter::A));
    }

    #[test]
    fn test_retreat_from_a_clears_but_keeps_memory() {
        let mut scene = SceneState::default();
        scene.set_letter(SceneLetter::single('B'));
        scene.retreat_letter();
        assert_eq!(scene.letter(), Some(SceneLetter::A));

        assert!(scene.retreat_letter());
        assert_eq!(scene.letter(), None);
        assert!(!scene.retreat_letter());

        scene.toggle_letter();
        assert_eq!(scene.letter(), Some(SceneLetter::A));
    }

    #[test]
    fn test_reset_letter() {
        let mut scene = SceneState::default();
        scene.set_letter(SceneLetter::new('F', Some('g')));
        assert!(scene.reset_letter());
        assert_eq!(scene.letter(), Some(SceneLetter::A));
        assert!(!scene.reset_letter());
    }

    #[test]
    fn test_number_uses_overflow_policy() {
        let mut clamp = SceneState::default();
        clamp.set_number(999);
        assert_eq!(clamp.increment(), None);

        let mut wrap = SceneState::with_overflow(SceneOverflow::Wrap(901));
        assert_eq!(wrap.overflow(), SceneOverflow::Wrap(901));
        wrap.set_number(901);
        assert_eq!(wrap.increment(), Some(1));
        assert_eq!(wrap.decrement(), None);
    }

    #[test]
    fn test_display() {
        let mut scene = SceneState::default();
        scene.set_number(12);
        assert_eq!(scene.display(), "012");
        scene.set_letter(SceneLetter::new('A', Some('b')));
        assert_eq!(scene.display(), "012Ab");
    }
}
