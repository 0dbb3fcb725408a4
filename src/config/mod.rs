//! Configuration management for restbell.
//!
//! This module handles loading and saving configuration from `~/.restbell/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{Config, GeneralConfig, ReminderConfig, TimerConfig};
