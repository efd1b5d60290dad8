//! Display module: image resolution and the presentation-layer boundary.
pub mod events;
pub mod plugin;
pub mod resolver;
pub mod state;
pub mod systems;

pub use events::{ImageLoadFailed, MascotCommand};
pub use plugin::DisplayPlugin;
pub use resolver::ImageResolver;
pub use state::BubbleVisibility;
