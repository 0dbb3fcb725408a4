//! Wall-clock and duration formatting helpers.
//!
//! Reminder scheduling works on plain strings: calendar dates as
//! `YYYY-MM-DD` and times of day as `HH:MM`. Both sort correctly with
//! string comparison, which the reminder list relies on.

use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

/// Matches a 24-hour `HH:MM` time of day.
static HHMM_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([01][0-9]|2[0-3]):([0-5][0-9])$")
        .unwrap_or_else(|e| panic!("Invalid time regex: {e}"))
});

/// Today's calendar date as `YYYY-MM-DD`.
#[must_use]
pub fn today_string() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// The current wall-clock minute as `HH:MM`.
#[must_use]
pub fn minute_string() -> String {
    Local::now().format("%H:%M").to_string()
}

/// Validate and normalize an `HH:MM` time-of-day string.
///
/// Returns `None` if the input is not a valid 24-hour time.
#[must_use]
pub fn parse_hhmm(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if HHMM_RE.is_match(trimmed) {
        Some(trimmed.to_string())
    } else {
        None
    }
}

/// Whole days from `earlier` to `later`, both `YYYY-MM-DD`.
///
/// Returns `None` if either string is not a valid calendar date.
#[must_use]
pub fn days_between(earlier: &str, later: &str) -> Option<i64> {
    let a = NaiveDate::parse_from_str(earlier, "%Y-%m-%d").ok()?;
    let b = NaiveDate::parse_from_str(later, "%Y-%m-%d").ok()?;
    Some(b.signed_duration_since(a).num_days())
}

/// Format a second count as `MM:SS`.
#[must_use]
pub fn format_mmss(seconds: u32) -> String {
    let minutes = seconds / 60;
    let secs = seconds % 60;
    format!("{minutes:02}:{secs:02}")
}

/// Label for a rest-duration preset: `"30s"`, `"45s"`, `"1p"`, `"1.5p"`.
///
/// Durations of a minute or more render in minutes with a `p` suffix,
/// keeping one decimal when the duration is not a whole minute.
#[must_use]
pub fn preset_label(seconds: u32) -> String {
    if seconds < 60 {
        format!("{seconds}s")
    } else if seconds % 60 == 0 {
        format!("{}p", seconds / 60)
    } else {
        format!("{:.1}p", f64::from(seconds) / 60.0)
    }
}
