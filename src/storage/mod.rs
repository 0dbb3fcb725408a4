//! Storage layer for restbell.
//!
//! This module provides the JSON key-value state file that holds the
//! persisted timer settings and the reminder list.

mod store;

pub use store::{StateStore, KEY_CURRENT_SET, KEY_REMINDERS, KEY_REST_SECONDS, KEY_TOTAL_SETS};
