//! Property-based invariant tests for scene letter sequencing.
//!
//! 1. Retreat undoes advance for every suffix except a lone `Z`.
//! 2. Advance undoes retreat whenever retreat lands on a letter.
//! 3. Advancing never produces `I`, `L`, `i` or `l`.
//! 4. Advancing from no suffix never returns to no suffix.
//! 5. Manual entry accepts exactly what `Display` prints.

use proptest::prelude::*;
use slate_core::entry::parse_letter;
use slate_core::letter::{
    SceneLetter, is_valid_primary, is_valid_secondary, next_letter, previous_letter,
};

// ── Strategy helpers ────────────────────────────────────────────────────

fn arb_primary() -> impl Strategy<Value = char> {
    prop::sample::select(('A'..='Z').filter(|&c| is_valid_primary(c)).collect::<Vec<_>>())
}

fn arb_secondary() -> impl Strategy<Value = Option<char>> {
    prop::option::of(prop::sample::select(
        ('a'..='z')
            .filter(|&c| is_valid_secondary(c))
            .collect::<Vec<_>>(),
    ))
}

fn arb_letter() -> impl Strategy<Value = SceneLetter> {
    (arb_primary(), arb_secondary()).prop_map(|(primary, secondary)| {
        SceneLetter::new(primary, secondary).expect("strategy only yields valid letters")
    })
}

fn arb_suffix() -> impl Strategy<Value = Option<SceneLetter>> {
    prop::option::of(arb_letter())
}

fn assert_valid(letter: SceneLetter) -> Result<(), TestCaseError> {
    prop_assert!(
        is_valid_primary(letter.primary()),
        "invalid primary in {}",
        letter
    );
    if let Some(secondary) = letter.secondary() {
        prop_assert!(
            is_valid_secondary(secondary),
            "invalid secondary in {}",
            letter
        );
    }
    Ok(())
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Retreat undoes advance
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn retreat_undoes_advance(suffix in arb_suffix()) {
        // Z and Zz both advance to Aa, which can only retreat to one of them
        prop_assume!(suffix != SceneLetter::single('Z'));

        let advanced = next_letter(suffix);
        prop_assert_eq!(previous_letter(Some(advanced)), suffix);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Advance undoes retreat
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn advance_undoes_retreat(letter in arb_letter()) {
        if let Some(prev) = previous_letter(Some(letter)) {
            prop_assert_eq!(next_letter(Some(prev)), letter);
        } else {
            prop_assert_eq!(letter, SceneLetter::A);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Skipped letters are never produced
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn advance_skips_confusable_letters(suffix in arb_suffix(), steps in 1usize..200) {
        let mut current = suffix;
        for _ in 0..steps {
            let next = next_letter(current);
            assert_valid(next)?;
            current = Some(next);
        }
    }

    #[test]
    fn retreat_skips_confusable_letters(letter in arb_letter(), steps in 1usize..200) {
        let mut current = Some(letter);
        for _ in 0..steps {
            current = previous_letter(current);
            match current {
                Some(prev) => assert_valid(prev)?,
                None => break,
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Advancing is total
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn advance_never_clears(steps in 1usize..600) {
        let mut current = None;
        for _ in 0..steps {
            current = Some(next_letter(current));
        }
        prop_assert!(current.is_some());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Display round-trips through manual entry
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn display_parses_back(letter in arb_letter()) {
        let text = letter.to_string();
        prop_assert_eq!(parse_letter(&text), Ok(Some(letter)));
    }
}
