//! Utility Module
//!
//! - [`time`]: wall-clock [`Timer`](time::Timer) producing the millisecond
//!   timestamps consumed by [`SceneEngine::update`](crate::engine::SceneEngine::update)

pub mod time;

pub use time::Timer;
