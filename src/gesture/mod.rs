//! Gesture module: the petting recogniser and its event.
pub mod detector;
pub mod events;
pub mod plugin;
pub mod systems;

pub use detector::{PettingDetector, SampleOutcome};
pub use events::PettingDetected;
pub use plugin::GesturePlugin;
