//! Events emitted by the gesture recogniser.
use bevy::prelude::*;

/// Fired when the four-segment petting pattern completes.
#[derive(Message, Debug, Clone, Copy)]
pub struct PettingDetected;
