//! Pointer interaction state for the current frame-to-frame session.
use bevy::prelude::*;

#[derive(Resource, Debug, Clone, Default)]
pub struct InteractionState {
    pub primary_held: bool,
    pub dragging: bool,
    /// The "happy" drag image is emitted once per drag, not per sample.
    pub drag_display_shown: bool,
}
