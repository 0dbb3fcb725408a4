//! Command-line interface for restbell.

pub mod args;
pub mod commands;
