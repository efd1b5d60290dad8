//! InputPlugin registers the inbound messages and their handlers.
use bevy::prelude::*;

use super::{
    events::{
        ConversationButtonPressed, PointerMoved, PrimaryPressed, PrimaryReleased, SecondaryPressed,
    },
    state::InteractionState,
    systems::{
        handle_pointer_motion, handle_primary_press, handle_primary_release, handle_secondary_press,
    },
};

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InteractionState>()
            .add_message::<PrimaryPressed>()
            .add_message::<PointerMoved>()
            .add_message::<PrimaryReleased>()
            .add_message::<SecondaryPressed>()
            .add_message::<ConversationButtonPressed>()
            .add_systems(
                Update,
                (
                    handle_primary_press,
                    handle_pointer_motion,
                    handle_primary_release,
                    handle_secondary_press,
                )
                    .chain(),
            );
    }
}
