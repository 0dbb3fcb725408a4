//! Feature implementations for restbell.
//!
//! - Rest timer: countdown between workout sets with a set counter
//! - Reminders: time-of-day supplement alerts with daily or
//!   every-other-day recurrence

pub mod reminders;
pub mod timer;
