//! Command implementations for restbell.

mod remind;

pub use remind::remind;
