//! Application state for the TUI.

use crate::config::Config;
use crate::core::{minute_string, today_string};
use crate::error::RestbellError;
use crate::features::reminders::{Frequency, ReminderBook, ReminderItem};
use crate::features::timer::{RestTimer, PRESETS};
use crate::signal::SignalSink;
use crate::storage::{
    StateStore, KEY_CURRENT_SET, KEY_REMINDERS, KEY_REST_SECONDS, KEY_TOTAL_SETS,
};

/// The two screens of the interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    /// Rest timer.
    Timer,
    /// Supplement reminders.
    Supplements,
}

/// Field focus within the add-reminder form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    /// Supplement name.
    Name,
    /// Time of day, HH:MM.
    Time,
    /// Daily or every other day.
    Frequency,
}

/// In-progress input for a new reminder.
#[derive(Debug, Clone)]
pub struct AddForm {
    /// Name input buffer.
    pub name: String,
    /// Time input buffer.
    pub time: String,
    /// Chosen recurrence.
    pub frequency: Frequency,
    /// Focused field.
    pub field: FormField,
}

impl AddForm {
    fn new() -> Self {
        Self {
            name: String::new(),
            time: String::new(),
            frequency: Frequency::Daily,
            field: FormField::Name,
        }
    }
}

/// Application state.
pub struct App {
    /// Active screen.
    pub tab: Tab,
    /// Rest timer state.
    pub timer: RestTimer,
    /// Supplement reminders.
    pub book: ReminderBook,
    /// Selected row in the (sorted) reminder list.
    pub selected: usize,
    /// Add-reminder form, when open.
    pub form: Option<AddForm>,
    /// Whether clear-all is awaiting confirmation.
    pub confirm_clear: bool,
    /// Status message to display.
    pub status: Option<String>,
    /// Signal channels for fired timers and reminders.
    signals: SignalSink,
    /// Persisted state.
    store: StateStore,
}

impl App {
    /// Create the app from config and persisted state.
    ///
    /// # Errors
    ///
    /// Returns an error if the state directory cannot be created.
    pub fn new(config: &Config) -> Result<Self, RestbellError> {
        let store = StateStore::new()?;
        Ok(Self::with_store(config, store))
    }

    /// Create the app over a specific store (for testing).
    #[must_use]
    pub fn with_store(config: &Config, store: StateStore) -> Self {
        let timer = RestTimer::new(
            store.get(KEY_REST_SECONDS, config.timer.default_rest_seconds),
            store.get(KEY_TOTAL_SETS, config.timer.default_total_sets),
            store.get(KEY_CURRENT_SET, 1),
        );
        let book = ReminderBook::from_items(store.get(KEY_REMINDERS, Vec::new()));

        Self {
            tab: Tab::Timer,
            timer,
            book,
            selected: 0,
            form: None,
            confirm_clear: false,
            status: Some("Press ? for help".to_string()),
            signals: SignalSink::from_config(&config.timer),
            store,
        }
    }

    /// Switch to the given tab, closing any pending prompt.
    pub fn switch_tab(&mut self, tab: Tab) {
        self.tab = tab;
        self.confirm_clear = false;
        self.status = None;
    }

    // ---- timer actions -------------------------------------------------

    /// Move the preset selection left or right and persist it.
    pub fn cycle_preset(&mut self, forward: bool) {
        let current = PRESETS
            .iter()
            .position(|&p| p == self.timer.selected())
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % PRESETS.len()
        } else {
            (current + PRESETS.len() - 1) % PRESETS.len()
        };

        self.timer.select(PRESETS[next]);
        self.persist(KEY_REST_SECONDS, &PRESETS[next]);
    }

    /// Start or pause the countdown.
    pub fn toggle_timer(&mut self) {
        if self.timer.is_running() {
            self.timer.pause();
        } else {
            self.timer.start();
        }
    }

    /// Reset the countdown to the selected duration.
    pub fn reset_timer(&mut self) {
        self.timer.reset();
    }

    /// Add a set and persist the counter.
    pub fn increment_sets(&mut self) {
        self.timer.increment_sets();
        self.persist(KEY_TOTAL_SETS, &self.timer.total_sets());
    }

    /// Remove a set and persist both counters.
    pub fn decrement_sets(&mut self) {
        self.timer.decrement_sets();
        self.persist(KEY_TOTAL_SETS, &self.timer.total_sets());
        self.persist(KEY_CURRENT_SET, &self.timer.current_set());
    }

    /// Finish the current set: advance, persist, restart the rest.
    pub fn complete_set(&mut self) {
        self.timer.complete_set();
        self.persist(KEY_CURRENT_SET, &self.timer.current_set());
    }

    /// Advance the countdown by one second, signaling when the rest ends.
    pub fn tick_second(&mut self) {
        if self.timer.tick() {
            self.signals.emit("Rest over!", "On to the next set!");
        }
    }

    // ---- reminder actions ----------------------------------------------

    /// Run one reminder poll, signaling and persisting fired items.
    pub fn poll_reminders(&mut self) {
        let fired = self.book.poll(&today_string(), &minute_string());
        if fired.is_empty() {
            return;
        }

        for hit in &fired {
            self.signals.emit(
                "Time for your supplement",
                &format!("{} ({})", hit.name, hit.time_of_day),
            );
        }
        self.persist_reminders();
    }

    /// Open the add-reminder form.
    pub fn open_form(&mut self) {
        self.form = Some(AddForm::new());
        self.status = None;
    }

    /// Close the form without adding.
    pub fn cancel_form(&mut self) {
        self.form = None;
    }

    /// Type a character into the focused form field.
    pub fn form_input(&mut self, c: char) {
        if let Some(form) = self.form.as_mut() {
            match form.field {
                FormField::Name => form.name.push(c),
                FormField::Time => {
                    if c.is_ascii_digit() || c == ':' {
                        form.time.push(c);
                    }
                }
                FormField::Frequency => {}
            }
        }
    }

    /// Delete the last character of the focused form field.
    pub fn form_backspace(&mut self) {
        if let Some(form) = self.form.as_mut() {
            match form.field {
                FormField::Name => {
                    form.name.pop();
                }
                FormField::Time => {
                    form.time.pop();
                }
                FormField::Frequency => {}
            }
        }
    }

    /// Move form focus to the next field.
    pub fn form_next_field(&mut self) {
        if let Some(form) = self.form.as_mut() {
            form.field = match form.field {
                FormField::Name => FormField::Time,
                FormField::Time => FormField::Frequency,
                FormField::Frequency => FormField::Name,
            };
        }
    }

    /// Toggle the frequency choice in the form.
    pub fn form_toggle_frequency(&mut self) {
        if let Some(form) = self.form.as_mut() {
            form.frequency = match form.frequency {
                Frequency::Daily => Frequency::EveryOtherDay,
                Frequency::EveryOtherDay => Frequency::Daily,
            };
        }
    }

    /// Submit the form, adding the reminder and persisting the list.
    ///
    /// Invalid input leaves the form open and shows the problem in the
    /// status line.
    pub fn submit_form(&mut self) {
        let Some(form) = self.form.clone() else {
            return;
        };

        match self.book.add(&form.name, &form.time, form.frequency) {
            Ok(item) => {
                self.form = None;
                self.status = Some(format!("Added {} at {}", item.name, item.time_of_day));
                self.persist_reminders();
            }
            Err(e) => {
                self.status = Some(e.to_string());
            }
        }
    }

    /// Move the reminder selection up.
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Move the reminder selection down.
    pub fn select_next(&mut self) {
        if !self.book.is_empty() && self.selected < self.book.len() - 1 {
            self.selected += 1;
        }
    }

    /// Delete the selected reminder and persist the list.
    pub fn delete_selected(&mut self) {
        let id = self
            .book
            .sorted()
            .get(self.selected)
            .map(|item| item.id.clone());

        if let Some(id) = id {
            self.book.remove(&id);
            if self.selected >= self.book.len() && self.selected > 0 {
                self.selected -= 1;
            }
            self.status = Some("Reminder removed".to_string());
            self.persist_reminders();
        }
    }

    /// Ask for confirmation before clearing all reminders.
    pub fn request_clear(&mut self) {
        if self.book.is_empty() {
            self.status = Some("No reminders to clear".to_string());
            return;
        }
        self.confirm_clear = true;
        self.status = Some("Clear ALL reminders? y/n".to_string());
    }

    /// Confirm the pending clear-all.
    pub fn confirm_clear_all(&mut self) {
        self.confirm_clear = false;
        self.book.clear();
        self.selected = 0;
        self.status = Some("All reminders cleared".to_string());
        self.persist_reminders();
    }

    /// Abort the pending clear-all.
    pub fn cancel_clear(&mut self) {
        self.confirm_clear = false;
        self.status = None;
    }

    /// Emit a test notification and beep.
    pub fn test_signal(&mut self) {
        self.signals.emit(
            "Supplement reminder test",
            "If you can see this, notifications work.",
        );
        self.status = Some("Test signal sent".to_string());
    }

    // ---- persistence ---------------------------------------------------

    /// Persist one key, surfacing failure in the status line.
    fn persist<T: serde::Serialize>(&mut self, key: &str, value: &T) {
        if let Err(e) = self.store.set(key, value) {
            self.status = Some(format!("Warning: could not save state: {e}"));
        }
    }

    /// Persist the whole reminder list.
    fn persist_reminders(&mut self) {
        let items: Vec<ReminderItem> = self.book.items().to_vec();
        self.persist(KEY_REMINDERS, &items);
    }
}
