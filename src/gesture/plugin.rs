//! GesturePlugin wires the petting detector.
use bevy::prelude::*;

use crate::config::MascotConfig;

use super::{
    detector::{PettingDetector, DEFAULT_PETTING_THRESHOLD},
    events::PettingDetected,
    systems::detect_petting,
};

pub struct GesturePlugin;

impl Plugin for GesturePlugin {
    fn build(&self, app: &mut App) {
        let threshold = app
            .world()
            .get_resource::<MascotConfig>()
            .map(|config| config.interaction.petting_threshold)
            .unwrap_or(DEFAULT_PETTING_THRESHOLD);
        app.insert_resource(PettingDetector::new(threshold))
            .add_message::<PettingDetected>()
            .add_systems(Update, detect_petting);
    }
}
