//! Supplement reminders.
//!
//! Provides named, time-of-day alerts for supplement intake:
//! - Daily or every-other-day recurrence per item
//! - Wall-clock polling that fires each item at most once per day
//! - Normalization of records written by older versions

mod book;
mod item;

pub use book::{FiredReminder, ReminderBook};
pub use item::{Frequency, ReminderItem};
