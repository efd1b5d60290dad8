//! ConversationPlugin wires button dispatch.
use bevy::prelude::*;

use super::systems::handle_conversation_buttons;

pub struct ConversationPlugin;

impl Plugin for ConversationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, handle_conversation_buttons);
    }
}
