use bevy::prelude::*;

use crate::config::MascotConfig;

use super::{
    idle::ActiveIdleAnimation,
    systems::{
        advance_idle_animation, apply_petting, finish_monologue, finish_petting, resume_idle_on_release,
        run_auto_hide, run_monologue, run_mood_decay, start_idle_animation, suspend_idle_on_press,
    },
    timers::MascotTimers,
};

pub struct SchedulerPlugin;

impl Plugin for SchedulerPlugin {
    fn build(&self, app: &mut App) {
        let settings = app
            .world()
            .get_resource::<MascotConfig>()
            .map(|config| config.timers.clone())
            .unwrap_or_default();
        app.insert_resource(MascotTimers::new(&settings));
        app.init_resource::<ActiveIdleAnimation>();
        app.add_systems(
            Update,
            (
                suspend_idle_on_press,
                resume_idle_on_release,
                apply_petting,
                finish_petting,
                run_auto_hide,
                start_idle_animation,
                advance_idle_animation,
                run_monologue,
                finish_monologue,
                run_mood_decay,
            )
                .chain()
                .after(crate::conversation::systems::handle_conversation_buttons)
                .after(crate::gesture::systems::detect_petting)
                // Last system of the input chain; keeps InteractionState
                // fresh when an animation finishes the frame of a press.
                .after(crate::input::systems::handle_secondary_press),
        );
    }
}
