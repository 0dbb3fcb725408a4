//! Rest-interval timer.
//!
//! Provides the countdown engine used between workout sets:
//! - Fixed rest-duration presets
//! - Start/pause/reset with a once-per-second tick
//! - Total/current set tracking with a "set done" shortcut

mod engine;

pub use engine::{RestTimer, PRESETS};
