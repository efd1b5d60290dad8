//! Messages crossing the boundary to the presentation layer.
use std::path::PathBuf;

use bevy::prelude::*;

/// Outbound commands. The presentation layer renders these; the core never
/// touches a window or an image file itself.
#[derive(Message, Debug, Clone, PartialEq)]
pub enum MascotCommand {
    SetImage(PathBuf),
    ShowUserBubble(String),
    ShowMascotBubble(String),
    HideBubbles,
    ShowContextMenu { x: f32, y: f32 },
}

/// Inbound report that a previously requested image could not be loaded.
#[derive(Message, Debug, Clone)]
pub struct ImageLoadFailed {
    pub path: PathBuf,
}
