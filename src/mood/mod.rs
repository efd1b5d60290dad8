//! Mood module: the bounded affect value and its wiring.
pub mod plugin;
pub mod state;

pub use plugin::MoodPlugin;
pub use state::Mood;
