//! MoodPlugin seeds the session mood from configuration.
use bevy::prelude::*;

use crate::config::MascotConfig;

use super::state::Mood;

pub struct MoodPlugin;

impl Plugin for MoodPlugin {
    fn build(&self, app: &mut App) {
        let start = app
            .world()
            .get_resource::<MascotConfig>()
            .map(|config| config.mood.start)
            .unwrap_or(50);
        app.insert_resource(Mood::new(start))
            .add_systems(Startup, log_starting_mood);
    }
}

fn log_starting_mood(mood: Res<Mood>) {
    info!("MoodPlugin initialised with mood {}", mood.value());
}
