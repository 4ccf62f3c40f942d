//! Manual entry validation
//!
//! Values typed into an edit dialog arrive as text. They are only committed
//! when they parse and fall inside the field's range, otherwise the previous
//! value stays.

use crate::counter::CounterPolicy;
use crate::letter::SceneLetter;
use serde::Serialize;
use std::fmt;

/// Field a manual entry was aimed at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryField {
    Roll,
    SceneNumber,
    SceneLetter,
    NumCams,
    TakeNumber,
}

impl EntryField {
    pub fn policy(self) -> CounterPolicy {
        match self {
            EntryField::NumCams => CounterPolicy::NUM_CAMS,
            _ => CounterPolicy::SLATE,
        }
    }
}

impl fmt::Display for EntryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntryField::Roll => "roll",
            EntryField::SceneNumber => "scene number",
            EntryField::SceneLetter => "scene letter",
            EntryField::NumCams => "camera count",
            EntryField::TakeNumber => "take number",
        };
        write!(f, "{name}")
    }
}

/// Errors from validating manual entry
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntryError {
    /// The text did not parse as a number.
    #[error("'{0}' is not a number")]
    NotANumber(String),

    /// The number parsed but is outside the field's range.
    #[error("{value} is out of range for {field} (expected {min}-{max})")]
    OutOfRange {
        field: EntryField,
        value: u32,
        min: u16,
        max: u16,
    },

    /// The text is not a usable scene letter suffix.
    #[error("'{0}' is not a valid scene letter")]
    InvalidLetter(String),
}

/// Parse a numeric field, enforcing the field's range
pub fn parse_number(field: EntryField, text: &str) -> Result<u16, EntryError> {
    let trimmed = text.trim();
    let value: u32 = trimmed
        .parse()
        .map_err(|_| EntryError::NotANumber(trimmed.to_string()))?;

    let policy = field.policy();
    match u16::try_from(value) {
        Ok(v) if policy.contains(v) => Ok(v),
        _ => Err(EntryError::OutOfRange {
            field,
            value,
            min: policy.min,
            max: policy.max,
        }),
    }
}

/// Parse a scene letter suffix
///
/// Empty text clears the suffix. The first letter is uppercased and an optional
/// second one lowercased, so "b" and "Bc" are both accepted.
pub fn parse_letter(text: &str) -> Result<Option<SceneLetter>, EntryError> {
    let trimmed = text.trim();
    let invalid = || EntryError::InvalidLetter(trimmed.to_string());

    let mut chars = trimmed.chars();
    let Some(primary) = chars.next() else {
        return Ok(None);
    };
    let secondary = chars.next().map(|c| c.to_ascii_lowercase());
    if chars.next().is_some() {
        return Err(invalid());
    }

    SceneLetter::new(primary.to_ascii_uppercase(), secondary)
        .map(Some)
        .ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_accepts_in_range() {
        assert_eq!(parse_number(EntryField::SceneNumber, "42"), Ok(42));
        assert_eq!(parse_number(EntryField::TakeNumber, " 999 "), Ok(999));
        assert_eq!(parse_number(EntryField::NumCams, "12"), Ok(12));
    }

    #[test]
    fn test_parse_number_rejects_garbage() {
        assert_eq!(
            parse_number(EntryField::Roll, "abc"),
            Err(EntryError::NotANumber("abc".to_string()))
        );
        assert!(matches!(
            parse_number(EntryField::Roll, ""),
            Err(EntryError::NotANumber(_))
        ));
        assert!(matches!(
            parse_number(EntryField::Roll, "-3"),
            Err(EntryError::NotANumber(_))
        ));
    }

    #[test]
    fn test_parse_number_rejects_out_of_range() {
        assert_eq!(
            parse_number(EntryField::SceneNumber, "0"),
            Err(EntryError::OutOfRange {
                field: EntryField::SceneNumber,
                value: 0,
                min: 1,
                max: 999,
            })
        );
        assert!(parse_number(EntryField::SceneNumber, "1000").is_err());
        assert!(parse_number(EntryField::NumCams, "100").is_err());
        assert!(parse_number(EntryField::TakeNumber, "70000").is_err());
    }

    #[test]
    fn test_parse_letter() {
        assert_eq!(parse_letter(""), Ok(None));
        assert_eq!(parse_letter("b"), Ok(SceneLetter::single('B')));
        assert_eq!(parse_letter("Bc"), Ok(SceneLetter::new('B', Some('c'))));
        assert_eq!(parse_letter("BC"), Ok(SceneLetter::new('B', Some('c'))));
    }

    #[test]
    fn test_parse_letter_rejects_reserved() {
        assert!(parse_letter("i").is_err());
        assert!(parse_letter("Al").is_err());
        assert!(parse_letter("7").is_err());
        assert!(parse_letter("Abc").is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = parse_number(EntryField::NumCams, "150").unwrap_err();
        assert_eq!(
            err.to_string(),
            "150 is out of range for camera count (expected 1-99)"
        );
    }
}
