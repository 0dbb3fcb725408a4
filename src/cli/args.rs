use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "restbell")]
#[command(about = "A rest-interval timer and supplement reminder for the terminal")]
#[command(long_about = "restbell - rest timer and supplement reminders

A terminal companion for the gym: a countdown timer for rest intervals
between sets, and time-of-day reminders for supplement intake. Reminders
fire a desktop notification and a short beep.

QUICK START:
  restbell tui                              Open the interactive timer
  restbell remind add \"Vitamin D\" -t 08:00  Add a daily reminder
  restbell remind list                      Show all reminders
  restbell remind watch                     Poll reminders headlessly

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  restbell <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    /// Falls back to the configured default when omitted.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive timer
    ///
    /// Starts the full-screen terminal interface with two tabs: the rest
    /// timer (presets, start/pause/reset, set counter) and the supplement
    /// reminder list. While the interface is open, reminders are polled
    /// every 30 seconds and fire a notification plus a beep when due.
    ///
    /// # Examples
    ///
    ///   restbell tui              Open the interface
    #[command(alias = "ui")]
    Tui,

    /// Manage supplement reminders
    ///
    /// Reminders are named, recur daily or every other day, and fire at a
    /// fixed time of day while restbell is running (the TUI or 'remind
    /// watch'). Each reminder fires at most once per calendar day.
    #[command(alias = "r")]
    Remind(RemindArgs),
}

#[derive(Args)]
pub struct RemindArgs {
    #[command(subcommand)]
    pub command: RemindCommands,
}

#[derive(Subcommand)]
pub enum RemindCommands {
    /// Add a reminder
    ///
    /// The name must be non-empty and the time a 24-hour HH:MM. New
    /// reminders have no fire history, so the first matching minute
    /// always fires regardless of frequency.
    ///
    /// # Examples
    ///
    ///   restbell remind add "Vitamin D" --time 08:00
    ///   restbell remind add "Zinc" -t 21:30 --every-other-day
    #[command(alias = "a")]
    Add {
        /// Display name of the supplement
        name: String,

        /// Time of day to fire, 24-hour HH:MM
        #[arg(short, long)]
        time: String,

        /// Fire every other day instead of daily
        #[arg(long)]
        every_other_day: bool,
    },

    /// List reminders
    ///
    /// Shows all reminders sorted by time of day, with their frequency
    /// and whether each has already fired today.
    #[command(alias = "ls")]
    List,

    /// Remove a reminder by id
    ///
    /// Ids are shown by 'restbell remind list'.
    #[command(alias = "rm")]
    Remove {
        /// Id of the reminder to remove
        id: String,
    },

    /// Remove all reminders
    ///
    /// Destructive; requires --force.
    Clear {
        /// Skip the confirmation requirement
        #[arg(long)]
        force: bool,
    },

    /// Fire a test notification and beep
    ///
    /// Useful for checking that the notification daemon and audio
    /// device work before relying on a reminder.
    Test,

    /// Poll reminders without the TUI
    ///
    /// Runs the reminder loop in the foreground, printing each fire.
    /// Stop with Ctrl-C. Fired dates are persisted, so a reminder that
    /// fired under watch will not fire again today in the TUI.
    Watch,
}
