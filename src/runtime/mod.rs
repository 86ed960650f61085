//! Runtime module
//!
//! Timer queue and the background scheduler behind `delay`.

pub mod scheduler;
pub mod timer;

pub use scheduler::{delay, ForwardMode, Scheduler};
pub use timer::{TimerId, TimerQueue, TimerStats};
