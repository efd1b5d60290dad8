//! Content module hosting the per-character bundle, its loader, and categories.
pub mod bundle;
pub mod loader;
pub mod plugin;

pub use bundle::{Category, ContentBundle, MonologueEntry};
pub use plugin::ContentPlugin;
