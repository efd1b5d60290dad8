use std::time::Duration;

use bevy::{app::ScheduleRunnerPlugin, log::LogPlugin, prelude::*};

mod config;
mod content;
mod conversation;
mod display;
mod gesture;
mod input;
mod mood;
mod scheduler;
mod settings;

use crate::{
    config::MascotConfig, content::ContentPlugin, conversation::ConversationPlugin,
    display::DisplayPlugin, gesture::GesturePlugin, input::InputPlugin, mood::MoodPlugin,
    scheduler::SchedulerPlugin, settings::MascotSettings,
};

/// Roughly 30 updates per second; plenty for timers and buffered messages.
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

fn main() {
    let mut app = App::new();
    // The log subscriber must be installed before anything warns about a
    // missing or malformed settings file.
    app.add_plugins((
        MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(FRAME_INTERVAL)),
        LogPlugin::default(),
    ));

    let settings = MascotSettings::load_or_default();
    let identity = settings.character;

    app.insert_resource(MascotConfig::load_or_default())
        .add_plugins((
            ContentPlugin::new(identity),
            DisplayPlugin::new(identity),
            MoodPlugin,
            GesturePlugin,
            InputPlugin,
            ConversationPlugin,
            SchedulerPlugin,
        ))
        .run();
}
