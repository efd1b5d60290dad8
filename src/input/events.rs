//! Inbound messages injected by the presentation layer.
use bevy::prelude::*;

use crate::content::Category;

#[derive(Message, Debug, Clone, Copy)]
pub struct PrimaryPressed {
    pub x: f32,
    pub y: f32,
}

/// Pointer sample. `dragging` is decided by the presentation layer, which is
/// the only side that knows whether the window itself is being moved.
#[derive(Message, Debug, Clone, Copy)]
pub struct PointerMoved {
    pub x: f32,
    pub y: f32,
    pub primary_held: bool,
    pub dragging: bool,
}

#[derive(Message, Debug, Clone, Copy)]
pub struct PrimaryReleased;

#[derive(Message, Debug, Clone, Copy)]
pub struct SecondaryPressed {
    pub x: f32,
    pub y: f32,
}

#[derive(Message, Debug, Clone, Copy)]
pub struct ConversationButtonPressed {
    pub category: Category,
}
