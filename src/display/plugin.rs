//! DisplayPlugin wires the resolver, bubble tracking, and outbound commands.
use bevy::prelude::*;

use crate::settings::CharacterIdentity;

use super::{
    events::{ImageLoadFailed, MascotCommand},
    resolver::ImageResolver,
    state::BubbleVisibility,
    systems::{show_initial_display, substitute_missing_images},
};

pub struct DisplayPlugin {
    identity: CharacterIdentity,
}

impl DisplayPlugin {
    pub fn new(identity: CharacterIdentity) -> Self {
        Self { identity }
    }
}

impl Plugin for DisplayPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ImageResolver::new(self.identity))
            .init_resource::<BubbleVisibility>()
            .add_message::<MascotCommand>()
            .add_message::<ImageLoadFailed>()
            .add_systems(Startup, (log_display_identity, show_initial_display))
            .add_systems(Update, substitute_missing_images);
    }
}

fn log_display_identity(resolver: Res<ImageResolver>) {
    info!(
        "DisplayPlugin initialised for {} (default image {})",
        resolver.identity().label(),
        resolver.default_path().display()
    );
}
