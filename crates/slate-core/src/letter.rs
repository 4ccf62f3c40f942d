//! Scene letter suffixes
//!
//! A scene number can carry a one or two tier letter suffix ("12A", "12Aa").
//! Stepping through suffixes skips I and L in both tiers, they read as a 1
//! on a slate.

use serde::{Serialize, Serializer};
use std::fmt;

const SKIPPED_UPPER: [char; 2] = ['I', 'L'];
const SKIPPED_LOWER: [char; 2] = ['i', 'l'];

/// A validated scene letter suffix
///
/// The secondary letter can only exist alongside a primary one, so the pair is
/// modelled as a primary with an optional secondary rather than two options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SceneLetter {
    primary: char,
    secondary: Option<char>,
}

impl SceneLetter {
    pub const A: Self = Self {
        primary: 'A',
        secondary: None,
    };

    /// Build a suffix, returns `None` if either letter is outside its alphabet
    pub fn new(primary: char, secondary: Option<char>) -> Option<Self> {
        if !is_valid_primary(primary) {
            return None;
        }
        if let Some(secondary) = secondary
            && !is_valid_secondary(secondary)
        {
            return None;
        }
        Some(Self { primary, secondary })
    }

    pub fn single(primary: char) -> Option<Self> {
        Self::new(primary, None)
    }

    pub fn primary(&self) -> char {
        self.primary
    }

    pub fn secondary(&self) -> Option<char> {
        self.secondary
    }

    /// Drop the second tier, keeping the primary letter
    pub fn without_secondary(self) -> Self {
        Self {
            primary: self.primary,
            secondary: None,
        }
    }
}

impl fmt::Display for SceneLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.primary)?;
        if let Some(secondary) = self.secondary {
            write!(f, "{secondary}")?;
        }
        Ok(())
    }
}

impl Serialize for SceneLetter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Uppercase ASCII letter other than I and L
pub fn is_valid_primary(c: char) -> bool {
    c.is_ascii_uppercase() && !SKIPPED_UPPER.contains(&c)
}

/// Lowercase ASCII letter other than i and l
pub fn is_valid_secondary(c: char) -> bool {
    c.is_ascii_lowercase() && !SKIPPED_LOWER.contains(&c)
}

fn step_forward(c: char, skipped: &[char; 2]) -> char {
    let mut next = char::from(c as u8 + 1);
    if skipped.contains(&next) {
        next = char::from(next as u8 + 1);
    }
    next
}

fn step_back(c: char, skipped: &[char; 2]) -> char {
    let mut prev = char::from(c as u8 - 1);
    if skipped.contains(&prev) {
        prev = char::from(prev as u8 - 1);
    }
    prev
}

/// Advance a suffix by one step
///
/// - no suffix starts at `A`
/// - `Z` enters the second tier at `Aa`
/// - a second tier `z` carries into the primary letter (`Z` wraps to `A`)
pub fn next_letter(current: Option<SceneLetter>) -> SceneLetter {
    let Some(current) = current else {
        return SceneLetter::A;
    };

    match current.secondary {
        None if current.primary == 'Z' => SceneLetter {
            primary: 'A',
            secondary: Some('a'),
        },
        None => SceneLetter {
            primary: step_forward(current.primary, &SKIPPED_UPPER),
            secondary: None,
        },
        Some('z') => {
            let primary = if current.primary == 'Z' {
                'A'
            } else {
                step_forward(current.primary, &SKIPPED_UPPER)
            };
            SceneLetter {
                primary,
                secondary: Some('a'),
            }
        }
        Some(secondary) => SceneLetter {
            primary: current.primary,
            secondary: Some(step_forward(secondary, &SKIPPED_LOWER)),
        },
    }
}

/// Step a suffix back by one, the inverse of [`next_letter`]
///
/// Retreating from a lone `A` clears the suffix entirely. A second tier `a`
/// borrows from the primary letter (`A` wraps to `Z`) and lands on `z`.
pub fn previous_letter(current: Option<SceneLetter>) -> Option<SceneLetter> {
    let current = current?;

    let prev = match current.secondary {
        None if current.primary == 'A' => return None,
        None => SceneLetter {
            primary: step_back(current.primary, &SKIPPED_UPPER),
            secondary: None,
        },
        Some('a') => {
            let primary = if current.primary == 'A' {
                'Z'
            } else {
                step_back(current.primary, &SKIPPED_UPPER)
            };
            SceneLetter {
                primary,
                secondary: Some('z'),
            }
        }
        Some(secondary) => SceneLetter {
            primary: current.primary,
            secondary: Some(step_back(secondary, &SKIPPED_LOWER)),
        },
    };

    Some(prev)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(primary: char, secondary: Option<char>) -> SceneLetter {
        SceneLetter::new(primary, secondary).unwrap()
    }

    #[test]
    fn test_next_from_empty_starts_at_a() {
        assert_eq!(next_letter(None), SceneLetter::A);
    }

    #[test]
    fn test_next_skips_i_and_l() {
        assert_eq!(next_letter(Some(letter('H', None))), letter('J', None));
        assert_eq!(next_letter(Some(letter('K', None))), letter('M', None));
        assert_eq!(
            next_letter(Some(letter('B', Some('h')))),
            letter('B', Some('j'))
        );
        assert_eq!(
            next_letter(Some(letter('B', Some('k')))),
            letter('B', Some('m'))
        );
    }

    #[test]
    fn test_nine_steps_from_empty_reach_j() {
        let mut current = None;
        for _ in 0..9 {
            current = Some(next_letter(current));
        }
        assert_eq!(current, Some(letter('J', None)));
    }

    #[test]
    fn test_z_enters_second_tier() {
        assert_eq!(next_letter(Some(letter('Z', None))), letter('A', Some('a')));
    }

    #[test]
    fn test_second_tier_carries_into_primary() {
        assert_eq!(
            next_letter(Some(letter('C', Some('z')))),
            letter('D', Some('a'))
        );
        assert_eq!(
            next_letter(Some(letter('H', Some('z')))),
            letter('J', Some('a'))
        );
        assert_eq!(
            next_letter(Some(letter('Z', Some('z')))),
            letter('A', Some('a'))
        );
    }

    #[test]
    fn test_previous_from_single_a_clears() {
        assert_eq!(previous_letter(Some(SceneLetter::A)), None);
        assert_eq!(previous_letter(None), None);
    }

    #[test]
    fn test_previous_skips_l_and_i() {
        assert_eq!(previous_letter(Some(letter('J', None))), Some(letter('H', None)));
        assert_eq!(previous_letter(Some(letter('M', None))), Some(letter('K', None)));
        assert_eq!(
            previous_letter(Some(letter('D', Some('j')))),
            Some(letter('D', Some('h')))
        );
    }

    #[test]
    fn test_previous_borrows_from_primary() {
        assert_eq!(
            previous_letter(Some(letter('J', Some('a')))),
            Some(letter('H', Some('z')))
        );
        assert_eq!(
            previous_letter(Some(letter('A', Some('a')))),
            Some(letter('Z', Some('z')))
        );
    }

    #[test]
    fn test_full_primary_alphabet_has_24_letters() {
        let mut current = SceneLetter::A;
        let mut seen = vec![current.primary()];
        while current.primary() != 'Z' {
            current = next_letter(Some(current));
            seen.push(current.primary());
        }
        assert_eq!(seen.len(), 24);
        assert!(!seen.contains(&'I'));
        assert!(!seen.contains(&'L'));
    }

    #[test]
    fn test_new_rejects_reserved_and_wrong_case() {
        assert!(SceneLetter::single('I').is_none());
        assert!(SceneLetter::single('L').is_none());
        assert!(SceneLetter::single('a').is_none());
        assert!(SceneLetter::new('A', Some('l')).is_none());
        assert!(SceneLetter::new('A', Some('B')).is_none());
        assert!(SceneLetter::new('A', Some('b')).is_some());
    }

    #[test]
    fn test_display() {
        assert_eq!(letter('Q', None).to_string(), "Q");
        assert_eq!(letter('Q', Some('c')).to_string(), "Qc");
    }
}
