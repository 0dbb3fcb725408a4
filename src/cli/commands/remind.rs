//! Supplement reminder command implementation.

use colored::Colorize;

use crate::cli::args::{OutputFormat, RemindCommands};
use crate::config::Config;
use crate::core::{minute_string, today_string};
use crate::error::RestbellError;
use crate::features::reminders::{Frequency, ReminderBook, ReminderItem};
use crate::output::{format_reminders, to_json};
use crate::signal::SignalSink;
use crate::storage::{StateStore, KEY_REMINDERS};

/// Execute remind subcommands.
///
/// # Errors
///
/// Returns an error if state cannot be read or written, or input is
/// invalid.
pub fn remind(
    config: &Config,
    cmd: RemindCommands,
    format: OutputFormat,
) -> Result<String, RestbellError> {
    let store = StateStore::new()?;
    let mut book = load_book(&store);

    match cmd {
        RemindCommands::Add {
            name,
            time,
            every_other_day,
        } => add_reminder(&store, &mut book, &name, &time, every_other_day, format),

        RemindCommands::List => format_reminders(&book, &today_string(), format),

        RemindCommands::Remove { id } => remove_reminder(&store, &mut book, &id, format),

        RemindCommands::Clear { force } => clear_reminders(&store, &mut book, force),

        RemindCommands::Test => test_signal(config),

        RemindCommands::Watch => watch(config, &store, &mut book),
    }
}

/// Load the reminder book from the persisted list.
fn load_book(store: &StateStore) -> ReminderBook {
    let items: Vec<ReminderItem> = store.get(KEY_REMINDERS, Vec::new());
    ReminderBook::from_items(items)
}

/// Persist the whole reminder list.
fn save_book(store: &StateStore, book: &ReminderBook) -> Result<(), RestbellError> {
    store.set(KEY_REMINDERS, &book.items())
}

/// Add a reminder and persist.
fn add_reminder(
    store: &StateStore,
    book: &mut ReminderBook,
    name: &str,
    time: &str,
    every_other_day: bool,
    format: OutputFormat,
) -> Result<String, RestbellError> {
    let frequency = if every_other_day {
        Frequency::EveryOtherDay
    } else {
        Frequency::Daily
    };

    let item = book.add(name, time, frequency)?;
    save_book(store, book)?;

    match format {
        OutputFormat::Json => to_json(&item),
        OutputFormat::Pretty => Ok(format!(
            "{} {} at {} ({})",
            "Added".green().bold(),
            item.name.bold(),
            item.time_of_day,
            item.frequency().label()
        )),
    }
}

/// Remove a reminder by id and persist.
fn remove_reminder(
    store: &StateStore,
    book: &mut ReminderBook,
    id: &str,
    format: OutputFormat,
) -> Result<String, RestbellError> {
    if !book.remove(id) {
        return Err(RestbellError::NotFound(format!("Reminder '{id}'")));
    }
    save_book(store, book)?;

    match format {
        OutputFormat::Json => Ok(format!("{{\"removed\": \"{id}\"}}")),
        OutputFormat::Pretty => Ok(format!("{} {id}", "Removed".green().bold())),
    }
}

/// Remove every reminder, gated behind --force.
fn clear_reminders(
    store: &StateStore,
    book: &mut ReminderBook,
    force: bool,
) -> Result<String, RestbellError> {
    if !force {
        return Err(RestbellError::Config(
            "This will delete all supplement reminders.\nUse --force to confirm.".to_string(),
        ));
    }

    let count = book.len();
    book.clear();
    save_book(store, book)?;

    Ok(format!("Cleared {count} reminders."))
}

/// Emit a test notification and beep.
fn test_signal(config: &Config) -> Result<String, RestbellError> {
    let sink = SignalSink::from_config(&config.timer);
    sink.emit(
        "Supplement reminder test",
        "If you can see this, notifications work.",
    );

    Ok("Test signal sent. Check for a notification and a beep.".to_string())
}

/// Run the reminder poll loop in the foreground until interrupted.
fn watch(
    config: &Config,
    store: &StateStore,
    book: &mut ReminderBook,
) -> Result<String, RestbellError> {
    let sink = SignalSink::from_config(&config.timer);
    let interval = std::time::Duration::from_secs(config.reminders.poll_interval_seconds.max(1));

    println!(
        "Watching {} reminders (poll every {}s). Stop with Ctrl-C.",
        book.len(),
        interval.as_secs()
    );

    loop {
        let today = today_string();
        let now = minute_string();
        let fired = book.poll(&today, &now);

        if !fired.is_empty() {
            for hit in &fired {
                sink.emit(
                    "Time for your supplement",
                    &format!("{} ({})", hit.name, hit.time_of_day),
                );
                println!(
                    "{} {} ({}) at {}",
                    "fired".green().bold(),
                    hit.name,
                    hit.time_of_day,
                    now
                );
            }
            save_book(store, book)?;
        }

        std::thread::sleep(interval);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> StateStore {
        StateStore::with_file(dir.path().join("state.json"))
    }

    #[test]
    fn test_add_then_reload_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        let mut book = load_book(&store);

        add_reminder(
            &store,
            &mut book,
            "Vitamin D",
            "08:00",
            false,
            OutputFormat::Pretty,
        )
        .unwrap();

        let reloaded = load_book(&store);
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.items()[0].name, "Vitamin D");
        assert_eq!(reloaded.items()[0].interval_days, 1);
    }

    #[test]
    fn test_add_every_other_day_persists_interval() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        let mut book = load_book(&store);

        add_reminder(
            &store,
            &mut book,
            "Zinc",
            "21:30",
            true,
            OutputFormat::Pretty,
        )
        .unwrap();

        let reloaded = load_book(&store);
        assert_eq!(reloaded.items()[0].interval_days, 2);
    }

    #[test]
    fn test_remove_unknown_id_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        let mut book = load_book(&store);

        let result = remove_reminder(&store, &mut book, "nope", OutputFormat::Pretty);
        assert!(matches!(result, Err(RestbellError::NotFound(_))));
    }

    #[test]
    fn test_clear_requires_force() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        let mut book = load_book(&store);
        book.add("Vitamin D", "08:00", Frequency::Daily).unwrap();

        assert!(clear_reminders(&store, &mut book, false).is_err());
        assert_eq!(book.len(), 1);

        clear_reminders(&store, &mut book, true).unwrap();
        assert!(book.is_empty());
        assert!(load_book(&store).is_empty());
    }
}
