//! Core abstractions for restbell.
//!
//! This module provides the wall-clock and formatting helpers shared by the
//! timer and reminder features.

mod clock;

pub use clock::{
    days_between, format_mmss, minute_string, parse_hhmm, preset_label, today_string,
};
