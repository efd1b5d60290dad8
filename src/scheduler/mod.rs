//! Scheduler module: role-keyed timers and the behaviors they drive.
pub mod idle;
pub mod plugin;
pub mod systems;
pub mod timers;

pub use idle::ActiveIdleAnimation;
pub use plugin::SchedulerPlugin;
pub use timers::MascotTimers;
