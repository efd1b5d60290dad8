//! Input module: the inbound half of the presentation-layer boundary.
pub mod events;
pub mod plugin;
pub mod state;
pub mod systems;

pub use events::{
    ConversationButtonPressed, PointerMoved, PrimaryPressed, PrimaryReleased, SecondaryPressed,
};
pub use plugin::InputPlugin;
pub use state::InteractionState;
