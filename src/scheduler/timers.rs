//! Role-keyed cancellable timers for the autonomous behaviors.
use std::time::Duration;

use bevy::prelude::*;
use rand::Rng;

use crate::config::TimerSettings;

/// All scheduled behavior lives here: the four role timers plus the two
/// transient holds (petting window, monologue display). A `None` slot is a
/// cancelled or suspended timer.
#[derive(Resource, Debug)]
pub struct MascotTimers {
    auto_hide: Option<Timer>,
    idle: Option<Timer>,
    monologue: Option<Timer>,
    mood_decay: Timer,
    petting_hold: Option<Timer>,
    monologue_hold: Option<Timer>,
}

impl MascotTimers {
    pub fn new(settings: &TimerSettings) -> Self {
        Self {
            auto_hide: None,
            idle: Some(random_timer(settings.idle_min_secs, settings.idle_max_secs)),
            monologue: Some(random_timer(
                settings.monologue_min_secs,
                settings.monologue_max_secs,
            )),
            mood_decay: Timer::new(settings.mood_decay, TimerMode::Repeating),
            petting_hold: None,
            monologue_hold: None,
        }
    }

    /// Arms (or re-arms) the one-shot auto-hide countdown, cancelling any
    /// previously pending firing.
    pub fn arm_auto_hide(&mut self, after: Duration) {
        self.auto_hide = Some(Timer::new(after, TimerMode::Once));
    }

    pub fn auto_hide_armed(&self) -> bool {
        self.auto_hide.is_some()
    }

    pub fn suspend_idle(&mut self) {
        self.idle = None;
    }

    pub fn idle_suspended(&self) -> bool {
        self.idle.is_none()
    }

    /// Schedules the next idle animation with a fresh random interval; the
    /// old interval is never reused.
    pub fn resume_idle(&mut self, settings: &TimerSettings) {
        self.idle = Some(random_timer(settings.idle_min_secs, settings.idle_max_secs));
    }

    pub fn arm_idle_in(&mut self, after: Duration) {
        self.idle = Some(Timer::new(after, TimerMode::Once));
    }

    pub fn rearm_monologue(&mut self, settings: &TimerSettings) {
        self.monologue = Some(random_timer(
            settings.monologue_min_secs,
            settings.monologue_max_secs,
        ));
    }

    pub fn arm_monologue_in(&mut self, after: Duration) {
        self.monologue = Some(Timer::new(after, TimerMode::Once));
    }

    pub fn cancel_monologue(&mut self) {
        self.monologue = None;
        self.monologue_hold = None;
    }

    pub fn monologue_armed(&self) -> bool {
        self.monologue.is_some()
    }

    pub fn arm_monologue_hold(&mut self, after: Duration) {
        self.monologue_hold = Some(Timer::new(after, TimerMode::Once));
    }

    pub fn arm_petting_hold(&mut self, after: Duration) {
        self.petting_hold = Some(Timer::new(after, TimerMode::Once));
    }

    pub fn petting_hold_armed(&self) -> bool {
        self.petting_hold.is_some()
    }

    pub fn tick_auto_hide(&mut self, delta: Duration) -> bool {
        tick_one_shot(&mut self.auto_hide, delta)
    }

    pub fn tick_idle(&mut self, delta: Duration) -> bool {
        tick_one_shot(&mut self.idle, delta)
    }

    pub fn tick_monologue(&mut self, delta: Duration) -> bool {
        tick_one_shot(&mut self.monologue, delta)
    }

    pub fn tick_monologue_hold(&mut self, delta: Duration) -> bool {
        tick_one_shot(&mut self.monologue_hold, delta)
    }

    pub fn tick_petting_hold(&mut self, delta: Duration) -> bool {
        tick_one_shot(&mut self.petting_hold, delta)
    }

    pub fn tick_mood_decay(&mut self, delta: Duration) -> bool {
        self.mood_decay.tick(delta).just_finished()
    }
}

/// Ticks an optional one-shot slot; a firing clears the slot so the owner
/// decides whether and when to re-arm.
fn tick_one_shot(slot: &mut Option<Timer>, delta: Duration) -> bool {
    let fired = slot
        .as_mut()
        .map(|timer| timer.tick(delta).just_finished())
        .unwrap_or(false);
    if fired {
        *slot = None;
    }
    fired
}

fn random_timer(min_secs: f32, max_secs: f32) -> Timer {
    let secs = if max_secs > min_secs {
        rand::rng().random_range(min_secs..=max_secs)
    } else {
        min_secs
    };
    Timer::from_seconds(secs, TimerMode::Once)
}
