//! Core-side mirror of what the presentation layer currently shows.
use bevy::prelude::*;

/// Tracks bubble visibility in lockstep with the emitted commands so the
/// autonomous behaviors (monologue skip rule) can read local state.
#[derive(Resource, Debug, Clone, Default)]
pub struct BubbleVisibility {
    pub user: bool,
    pub mascot: bool,
}

impl BubbleVisibility {
    pub fn any_visible(&self) -> bool {
        self.user || self.mascot
    }
}
