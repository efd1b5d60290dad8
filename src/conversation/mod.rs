//! Conversation module: scripted prompt/response dispatch.
pub mod engine;
pub mod plugin;
pub mod systems;

pub use plugin::ConversationPlugin;
