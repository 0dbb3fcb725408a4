//! Output formatting for restbell.
//!
//! This module provides formatters for displaying the reminder list in
//! pretty and JSON forms.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::RestbellError;
use crate::features::reminders::ReminderBook;

pub use json::{format_reminders_json, to_json};
pub use pretty::format_reminders_pretty;

/// Format the reminder list based on output format.
///
/// # Errors
///
/// Returns `RestbellError::Parse` if JSON serialization fails.
pub fn format_reminders(
    book: &ReminderBook,
    today: &str,
    format: OutputFormat,
) -> Result<String, RestbellError> {
    match format {
        OutputFormat::Pretty => Ok(format_reminders_pretty(book, today)),
        OutputFormat::Json => format_reminders_json(book),
    }
}
