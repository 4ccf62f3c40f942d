//! Numeric counter rules shared by roll, scene, take and prefix fields

use serde::{Deserialize, Serialize};

/// Inclusive bounds for a slate counter
///
/// Stepping past either bound is a no-op, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterPolicy {
    pub min: u16,
    pub max: u16,
}

impl CounterPolicy {
    /// Roll, scene and take numbers
    pub const SLATE: Self = Self { min: 1, max: 999 };
    /// Dual mode scene prefix
    pub const PREFIX: Self = Self { min: 1, max: 99 };
    /// Camera count accepted from manual entry
    pub const NUM_CAMS: Self = Self { min: 1, max: 99 };

    pub fn increment(&self, value: u16) -> u16 {
        value.saturating_add(1).clamp(self.min, self.max)
    }

    pub fn decrement(&self, value: u16) -> u16 {
        value.saturating_sub(1).clamp(self.min, self.max)
    }

    pub fn contains(&self, value: u16) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Jump to the first number of the next hundred block
///
/// 001 → 101 → 201 → … → 901 → 001
pub fn next_hundred(value: u16) -> u16 {
    let hundred = value / 100;
    if hundred >= 9 { 1 } else { (hundred + 1) * 100 + 1 }
}

/// What happens when the scene number is incremented at its ceiling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneOverflow {
    /// Stop at 999
    #[default]
    Clamp,
    /// Go back to 1 once the given ceiling has been reached
    Wrap(u16),
}

impl SceneOverflow {
    pub fn increment(self, value: u16) -> u16 {
        match self {
            SceneOverflow::Clamp => CounterPolicy::SLATE.increment(value),
            SceneOverflow::Wrap(ceiling) if value >= ceiling => CounterPolicy::SLATE.min,
            SceneOverflow::Wrap(_) => CounterPolicy::SLATE.increment(value),
        }
    }

    /// The floor never wraps under either policy
    pub fn decrement(self, value: u16) -> u16 {
        CounterPolicy::SLATE.decrement(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_clamps_at_max() {
        assert_eq!(CounterPolicy::SLATE.increment(1), 2);
        assert_eq!(CounterPolicy::SLATE.increment(998), 999);
        assert_eq!(CounterPolicy::SLATE.increment(999), 999);
        assert_eq!(CounterPolicy::PREFIX.increment(99), 99);
    }

    #[test]
    fn test_decrement_clamps_at_min() {
        assert_eq!(CounterPolicy::SLATE.decrement(2), 1);
        assert_eq!(CounterPolicy::SLATE.decrement(1), 1);
        assert_eq!(CounterPolicy::PREFIX.decrement(1), 1);
    }

    #[test]
    fn test_next_hundred_sequence() {
        let mut value = 1;
        let mut seen = vec![value];
        for _ in 0..10 {
            value = next_hundred(value);
            seen.push(value);
        }
        assert_eq!(
            seen,
            vec![1, 101, 201, 301, 401, 501, 601, 701, 801, 901, 1]
        );
    }

    #[test]
    fn test_next_hundred_from_mid_block() {
        assert_eq!(next_hundred(4), 101);
        assert_eq!(next_hundred(157), 201);
        assert_eq!(next_hundred(999), 1);
    }

    #[test]
    fn test_scene_overflow_clamp() {
        assert_eq!(SceneOverflow::Clamp.increment(999), 999);
        assert_eq!(SceneOverflow::Clamp.increment(901), 902);
    }

    #[test]
    fn test_scene_overflow_wrap_at_999() {
        let policy = SceneOverflow::Wrap(999);
        assert_eq!(policy.increment(998), 999);
        assert_eq!(policy.increment(999), 1);
        assert_eq!(policy.decrement(1), 1);
    }

    #[test]
    fn test_scene_overflow_wrap_at_901() {
        let policy = SceneOverflow::Wrap(901);
        assert_eq!(policy.increment(900), 901);
        assert_eq!(policy.increment(901), 1);
        assert_eq!(policy.increment(950), 1);
    }

    #[test]
    fn test_scene_overflow_from_toml() {
        #[derive(Deserialize)]
        struct Wrapper {
            overflow: SceneOverflow,
        }

        let clamp: Wrapper = toml::from_str(r#"overflow = "clamp""#).unwrap();
        assert_eq!(clamp.overflow, SceneOverflow::Clamp);

        let wrap: Wrapper = toml::from_str("overflow = { wrap = 901 }").unwrap();
        assert_eq!(wrap.overflow, SceneOverflow::Wrap(901));
    }
}
