//! Petting gesture state machine.
//!
//! Consumes horizontal pointer positions sampled while the primary button is
//! held and no drag is in progress, and recognises a four-segment
//! right-left-right-left stroke pattern.
use bevy::prelude::*;

pub const DEFAULT_PETTING_THRESHOLD: f32 = 10.0;

const PATTERN_LENGTH: u8 = 4;

/// Result of feeding one sample to the detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleOutcome {
    /// First sample of a session; only records the position.
    Primed,
    /// Movement below the threshold; state untouched.
    Ignored,
    /// The sample matched the expected direction.
    Advanced(u8),
    /// Wrong direction; progress reset to the start.
    Broken,
    /// The full pattern completed.
    Completed,
}

#[derive(Resource, Debug, Clone)]
pub struct PettingDetector {
    threshold: f32,
    last_x: Option<f32>,
    stage: u8,
}

impl PettingDetector {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            last_x: None,
            stage: 0,
        }
    }

    pub fn stage(&self) -> u8 {
        self.stage
    }

    pub fn last_x(&self) -> Option<f32> {
        self.last_x
    }

    pub fn observe(&mut self, x: f32) -> SampleOutcome {
        let Some(last) = self.last_x else {
            self.last_x = Some(x);
            return SampleOutcome::Primed;
        };

        let delta = x - last;
        if delta.abs() <= self.threshold {
            // Jitter: neither the reference position nor the stage moves.
            return SampleOutcome::Ignored;
        }

        self.last_x = Some(x);
        let expects_right = self.stage % 2 == 0;
        let moved_right = delta > 0.0;
        if moved_right != expects_right {
            self.stage = 0;
            return SampleOutcome::Broken;
        }

        self.stage += 1;
        if self.stage == PATTERN_LENGTH {
            self.stage = 0;
            SampleOutcome::Completed
        } else {
            SampleOutcome::Advanced(self.stage)
        }
    }

    /// Clears all progress. Called whenever the holding condition ends, so a
    /// stale partial sequence never carries into the next gesture session.
    pub fn reset(&mut self) {
        self.stage = 0;
        self.last_x = None;
    }
}

impl Default for PettingDetector {
    fn default() -> Self {
        Self::new(DEFAULT_PETTING_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(detector: &mut PettingDetector, deltas: &[f32]) -> Vec<SampleOutcome> {
        let mut x = 100.0;
        let mut outcomes = vec![detector.observe(x)];
        for delta in deltas {
            x += delta;
            outcomes.push(detector.observe(x));
        }
        outcomes
    }

    #[test]
    fn alternating_pattern_completes_exactly_once() {
        let mut detector = PettingDetector::default();
        let outcomes = feed(&mut detector, &[15.0, -15.0, 15.0, -15.0]);
        assert_eq!(
            outcomes,
            vec![
                SampleOutcome::Primed,
                SampleOutcome::Advanced(1),
                SampleOutcome::Advanced(2),
                SampleOutcome::Advanced(3),
                SampleOutcome::Completed,
            ]
        );
        assert_eq!(detector.stage(), 0);
    }

    #[test]
    fn sub_threshold_motion_is_ignored() {
        let mut detector = PettingDetector::default();
        let outcomes = feed(&mut detector, &[15.0, -15.0, 5.0, 15.0]);
        assert_eq!(outcomes[3], SampleOutcome::Ignored);
        // The jittered sample kept the reference position, so the next
        // right stroke measures its full delta from the pre-jitter position.
        assert_eq!(outcomes[4], SampleOutcome::Advanced(3));
        assert_eq!(detector.stage(), 3);
    }

    #[test]
    fn sub_threshold_motion_leaves_stage_at_two() {
        let mut detector = PettingDetector::default();
        feed(&mut detector, &[15.0, -15.0]);
        assert_eq!(detector.stage(), 2);
        let last = detector.last_x();

        assert_eq!(detector.observe(last.unwrap() + 5.0), SampleOutcome::Ignored);
        assert_eq!(detector.stage(), 2);
        assert_eq!(detector.last_x(), last);
    }

    #[test]
    fn repeated_direction_resets_the_sequence() {
        let mut detector = PettingDetector::default();
        let outcomes = feed(&mut detector, &[15.0, 15.0]);
        assert_eq!(outcomes[2], SampleOutcome::Broken);
        assert_eq!(detector.stage(), 0);
        // The reference position did move with the breaking sample.
        assert_eq!(detector.last_x(), Some(130.0));
    }

    #[test]
    fn reset_clears_stage_and_reference() {
        let mut detector = PettingDetector::default();
        feed(&mut detector, &[15.0, -15.0]);
        assert_eq!(detector.stage(), 2);

        detector.reset();
        assert_eq!(detector.stage(), 0);
        assert_eq!(detector.last_x(), None);

        // A fresh session starts from priming again.
        assert_eq!(detector.observe(40.0), SampleOutcome::Primed);
    }

    #[test]
    fn two_full_patterns_complete_twice() {
        let mut detector = PettingDetector::default();
        let outcomes = feed(
            &mut detector,
            &[15.0, -15.0, 15.0, -15.0, 15.0, -15.0, 15.0, -15.0],
        );
        let completions = outcomes
            .iter()
            .filter(|outcome| **outcome == SampleOutcome::Completed)
            .count();
        assert_eq!(completions, 2);
    }
}
