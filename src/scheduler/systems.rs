//! Timer-driven autonomous behaviors and their coupling to interaction.
use bevy::prelude::*;
use rand::Rng;

use crate::{
    config::MascotConfig,
    content::ContentBundle,
    display::{
        systems::{hide_bubbles, set_display, show_mascot_bubble},
        BubbleVisibility, ImageResolver, MascotCommand,
    },
    gesture::PettingDetected,
    input::{InteractionState, PrimaryPressed, PrimaryReleased},
    mood::Mood,
};

use super::{
    idle::{pick_animation, ActiveIdleAnimation, AnimationProgress},
    timers::MascotTimers,
};

/// Fixed acknowledgement shown when the petting gesture completes.
pub const PETTING_ACKNOWLEDGEMENT: &str = "That petting feels wonderful!";

/// Pressing the character cancels the pending idle tick before any timer
/// system can observe it this frame.
pub fn suspend_idle_on_press(
    mut presses: MessageReader<PrimaryPressed>,
    mut timers: ResMut<MascotTimers>,
) {
    if presses.read().next().is_some() {
        timers.suspend_idle();
    }
}

pub fn resume_idle_on_release(
    mut releases: MessageReader<PrimaryReleased>,
    config: Res<MascotConfig>,
    mut timers: ResMut<MascotTimers>,
) {
    if releases.read().next().is_some() {
        timers.resume_idle(&config.timers);
    }
}

pub fn apply_petting(
    mut petted: MessageReader<PettingDetected>,
    config: Res<MascotConfig>,
    resolver: Res<ImageResolver>,
    mut timers: ResMut<MascotTimers>,
    mut mood: ResMut<Mood>,
    mut bubbles: ResMut<BubbleVisibility>,
    mut commands: MessageWriter<MascotCommand>,
) {
    if petted.read().next().is_none() {
        return;
    }
    timers.suspend_idle();
    mood.increase(config.interaction.petting_mood_gain);
    set_display("happy", &resolver, &mut commands);
    show_mascot_bubble(PETTING_ACKNOWLEDGEMENT, &mut bubbles, &mut commands);
    timers.arm_petting_hold(config.timers.petting_hold);
    info!("Petting recognised; mood now {}", mood.value());
}

pub fn finish_petting(
    time: Res<Time>,
    config: Res<MascotConfig>,
    resolver: Res<ImageResolver>,
    mood: Res<Mood>,
    mut timers: ResMut<MascotTimers>,
    mut bubbles: ResMut<BubbleVisibility>,
    mut commands: MessageWriter<MascotCommand>,
) {
    if timers.tick_petting_hold(time.delta()) {
        hide_bubbles(
            &mut bubbles,
            mood.display_state(&config.thresholds),
            &resolver,
            &mut commands,
        );
        timers.resume_idle(&config.timers);
    }
}

pub fn run_auto_hide(
    time: Res<Time>,
    config: Res<MascotConfig>,
    resolver: Res<ImageResolver>,
    mood: Res<Mood>,
    mut timers: ResMut<MascotTimers>,
    mut bubbles: ResMut<BubbleVisibility>,
    mut commands: MessageWriter<MascotCommand>,
) {
    if timers.tick_auto_hide(time.delta()) {
        hide_bubbles(
            &mut bubbles,
            mood.display_state(&config.thresholds),
            &resolver,
            &mut commands,
        );
        debug!("Auto-hide expired; bubbles dismissed");
    }
}

pub fn start_idle_animation(
    time: Res<Time>,
    config: Res<MascotConfig>,
    resolver: Res<ImageResolver>,
    mood: Res<Mood>,
    mut timers: ResMut<MascotTimers>,
    mut animation: ResMut<ActiveIdleAnimation>,
    mut bubbles: ResMut<BubbleVisibility>,
    mut commands: MessageWriter<MascotCommand>,
) {
    if !timers.tick_idle(time.delta()) {
        return;
    }

    hide_bubbles(
        &mut bubbles,
        mood.display_state(&config.thresholds),
        &resolver,
        &mut commands,
    );
    let steps = pick_animation(&mut rand::rng());
    if let Some(first) = animation.start(steps) {
        set_display(first, &resolver, &mut commands);
        debug!("Idle animation started ({} steps)", steps.len());
    }
}

/// Plays the active animation strictly in sequence; only the step holds
/// yield back to the schedule.
pub fn advance_idle_animation(
    time: Res<Time>,
    config: Res<MascotConfig>,
    resolver: Res<ImageResolver>,
    interaction: Res<InteractionState>,
    mut timers: ResMut<MascotTimers>,
    mut animation: ResMut<ActiveIdleAnimation>,
    mut commands: MessageWriter<MascotCommand>,
) {
    match animation.advance(time.delta()) {
        AnimationProgress::Step(state) => set_display(state, &resolver, &mut commands),
        AnimationProgress::Finished => {
            set_display("default", &resolver, &mut commands);
            if !interaction.primary_held {
                timers.resume_idle(&config.timers);
            }
        }
        AnimationProgress::Idle | AnimationProgress::Holding => {}
    }
}

pub fn run_monologue(
    time: Res<Time>,
    config: Res<MascotConfig>,
    resolver: Res<ImageResolver>,
    bundle: Res<ContentBundle>,
    mut timers: ResMut<MascotTimers>,
    mut bubbles: ResMut<BubbleVisibility>,
    mut commands: MessageWriter<MascotCommand>,
) {
    if !timers.tick_monologue(time.delta()) {
        return;
    }

    // A visible bubble wins: skip this tick entirely, do not queue.
    if bubbles.any_visible() {
        timers.rearm_monologue(&config.timers);
        debug!("Monologue skipped; a bubble is already visible");
        return;
    }

    let mut rng = rand::rng();
    let entry = bundle.pick_monologue(&mut rng).clone();
    set_display(&entry.image_state, &resolver, &mut commands);
    show_mascot_bubble(entry.text, &mut bubbles, &mut commands);

    let hold_secs = rng.random_range(
        config.timers.monologue_hold_min_secs..=config.timers.monologue_hold_max_secs,
    );
    timers.arm_monologue_hold(std::time::Duration::from_secs_f32(hold_secs));
}

pub fn finish_monologue(
    time: Res<Time>,
    config: Res<MascotConfig>,
    resolver: Res<ImageResolver>,
    mut timers: ResMut<MascotTimers>,
    mut bubbles: ResMut<BubbleVisibility>,
    mut commands: MessageWriter<MascotCommand>,
) {
    if timers.tick_monologue_hold(time.delta()) {
        hide_bubbles(&mut bubbles, "default", &resolver, &mut commands);
        timers.rearm_monologue(&config.timers);
    }
}

pub fn run_mood_decay(
    time: Res<Time>,
    config: Res<MascotConfig>,
    mut timers: ResMut<MascotTimers>,
    mut mood: ResMut<Mood>,
) {
    if timers.tick_mood_decay(time.delta()) {
        mood.decrease(config.mood.decay_amount);
        debug!("Mood decays to {}", mood.value());
    }
}
