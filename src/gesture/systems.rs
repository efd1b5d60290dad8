//! Feeds pointer samples into the petting detector.
use bevy::prelude::*;

use crate::input::{PointerMoved, PrimaryReleased};

use super::{
    detector::{PettingDetector, SampleOutcome},
    events::PettingDetected,
};

pub fn detect_petting(
    mut detector: ResMut<PettingDetector>,
    mut releases: MessageReader<PrimaryReleased>,
    mut moves: MessageReader<PointerMoved>,
    mut petted: MessageWriter<PettingDetected>,
) {
    if releases.read().next().is_some() {
        detector.reset();
    }

    for sample in moves.read() {
        if !sample.primary_held || sample.dragging {
            detector.reset();
            continue;
        }
        if detector.observe(sample.x) == SampleOutcome::Completed {
            debug!("Petting gesture completed");
            petted.write(PettingDetected);
        }
    }
}
