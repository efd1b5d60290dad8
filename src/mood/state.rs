//! Bounded affect value driving the default display state.
use bevy::prelude::*;

use crate::config::MoodThresholds;

pub const MOOD_MIN: i32 = 0;
pub const MOOD_MAX: i32 = 100;

/// Session-lifetime mood value. Always within [MOOD_MIN, MOOD_MAX]; not
/// persisted across restarts.
#[derive(Resource, Debug, Clone)]
pub struct Mood {
    value: i32,
}

impl Mood {
    pub fn new(start: i32) -> Self {
        Self {
            value: start.clamp(MOOD_MIN, MOOD_MAX),
        }
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn increase(&mut self, amount: i32) {
        if amount <= 0 {
            return;
        }
        self.value = (self.value + amount).min(MOOD_MAX);
    }

    pub fn decrease(&mut self, amount: i32) {
        if amount <= 0 {
            return;
        }
        self.value = (self.value - amount).max(MOOD_MIN);
    }

    /// Display state for the current value. Extreme bands win over the
    /// moderate ones; "default" is the catch-all.
    pub fn display_state(&self, thresholds: &MoodThresholds) -> &'static str {
        if self.value > thresholds.love {
            "love"
        } else if self.value > thresholds.happy {
            "happy"
        } else if self.value < thresholds.angry {
            "angry"
        } else if self.value < thresholds.sad {
            "sad"
        } else {
            "default"
        }
    }
}

impl Default for Mood {
    fn default() -> Self {
        Self::new(50)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thresholds() -> MoodThresholds {
        MoodThresholds {
            love: 90,
            happy: 70,
            sad: 30,
            angry: 10,
        }
    }

    #[test]
    fn value_never_leaves_the_range() {
        let mut mood = Mood::default();
        for _ in 0..50 {
            mood.increase(17);
        }
        assert_eq!(mood.value(), MOOD_MAX);

        for _ in 0..50 {
            mood.decrease(23);
        }
        assert_eq!(mood.value(), MOOD_MIN);

        mood.increase(0);
        mood.decrease(-5);
        assert_eq!(mood.value(), MOOD_MIN);
    }

    #[test]
    fn start_value_is_clamped() {
        assert_eq!(Mood::new(500).value(), MOOD_MAX);
        assert_eq!(Mood::new(-3).value(), MOOD_MIN);
    }

    #[test]
    fn display_bands_use_exact_boundaries() {
        let thresholds = thresholds();
        let cases = [
            (91, "love"),
            (90, "happy"),
            (71, "happy"),
            (70, "default"),
            (30, "default"),
            (29, "sad"),
            (10, "sad"),
            (9, "angry"),
            (0, "angry"),
            (100, "love"),
        ];
        for (value, expected) in cases {
            assert_eq!(
                Mood::new(value).display_state(&thresholds),
                expected,
                "mood {value}"
            );
        }
    }
}
