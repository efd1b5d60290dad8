//! Canned idle animations and the step runner.
use std::time::Duration;

use bevy::prelude::*;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationStep {
    pub state: &'static str,
    pub hold_ms: u64,
}

const fn step(state: &'static str, hold_ms: u64) -> AnimationStep {
    AnimationStep { state, hold_ms }
}

const STRETCH: &[AnimationStep] = &[step("stretch_start", 500), step("stretch_end", 500)];
const YAWN: &[AnimationStep] = &[step("yawn", 1000)];
const LOOK_AROUND: &[AnimationStep] = &[
    step("look_left", 500),
    step("look_right", 500),
    step("look_up", 500),
];
const SIT: &[AnimationStep] = &[step("sit", 2000)];
const LIE_DOWN: &[AnimationStep] = &[step("lie_down", 3000)];

pub const LIBRARY: [&[AnimationStep]; 5] = [STRETCH, YAWN, LOOK_AROUND, SIT, LIE_DOWN];

pub fn pick_animation(rng: &mut impl Rng) -> &'static [AnimationStep] {
    LIBRARY[rng.random_range(0..LIBRARY.len())]
}

#[derive(Debug)]
struct AnimationRun {
    steps: &'static [AnimationStep],
    index: usize,
    hold: Timer,
}

/// Progress report from one tick of the runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationProgress {
    /// No animation is running.
    Idle,
    /// The current step is still being held.
    Holding,
    /// The next step begins; display this state.
    Step(&'static str),
    /// The sequence completed; revert to "default".
    Finished,
}

/// Runs one idle animation at a time, strictly step by step. The holds are
/// the only points where an animation yields back to the schedule.
#[derive(Resource, Debug, Default)]
pub struct ActiveIdleAnimation {
    run: Option<AnimationRun>,
}

impl ActiveIdleAnimation {
    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    /// Begins a sequence and returns the first step's display state.
    pub fn start(&mut self, steps: &'static [AnimationStep]) -> Option<&'static str> {
        let first = steps.first()?;
        self.run = Some(AnimationRun {
            steps,
            index: 0,
            hold: Timer::new(Duration::from_millis(first.hold_ms), TimerMode::Once),
        });
        Some(first.state)
    }

    pub fn advance(&mut self, delta: Duration) -> AnimationProgress {
        let Some(run) = self.run.as_mut() else {
            return AnimationProgress::Idle;
        };

        if !run.hold.tick(delta).just_finished() {
            return AnimationProgress::Holding;
        }

        run.index += 1;
        match run.steps.get(run.index) {
            Some(next) => {
                run.hold = Timer::new(Duration::from_millis(next.hold_ms), TimerMode::Once);
                AnimationProgress::Step(next.state)
            }
            None => {
                self.run = None;
                AnimationProgress::Finished
            }
        }
    }
}
