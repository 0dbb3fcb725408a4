//! The reminder list and its polling pass.

use crate::core::parse_hhmm;
use crate::error::RestbellError;

use super::{Frequency, ReminderItem};

/// A reminder that fired during a poll, for signaling and display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiredReminder {
    /// Display name of the item.
    pub name: String,
    /// Configured time of day.
    pub time_of_day: String,
}

/// The full set of supplement reminders.
///
/// Items keep insertion order internally; display surfaces use
/// [`ReminderBook::sorted`]. The book never touches storage itself - the
/// owner loads it from and persists it to the `supps` key.
#[derive(Debug, Clone, Default)]
pub struct ReminderBook {
    items: Vec<ReminderItem>,
}

impl ReminderBook {
    /// Build a book from persisted records, normalizing each one.
    #[must_use]
    pub fn from_items(mut items: Vec<ReminderItem>) -> Self {
        for item in &mut items {
            item.normalize();
        }
        Self { items }
    }

    /// Add a reminder.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty after trimming or the time
    /// is not a valid 24-hour `HH:MM`.
    pub fn add(
        &mut self,
        name: &str,
        time_of_day: &str,
        frequency: Frequency,
    ) -> Result<ReminderItem, RestbellError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RestbellError::Config(
                "Reminder name cannot be empty".to_string(),
            ));
        }

        let time = parse_hhmm(time_of_day).ok_or_else(|| {
            RestbellError::Config(format!(
                "Invalid time '{time_of_day}': expected 24-hour HH:MM"
            ))
        })?;

        let item = ReminderItem::new(name, time, frequency);
        self.items.push(item.clone());
        Ok(item)
    }

    /// Remove the reminder with the given id.
    ///
    /// Returns true if an item was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Remove every reminder.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Number of reminders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the book holds no reminders.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The items in insertion order, for persistence.
    #[must_use]
    pub fn items(&self) -> &[ReminderItem] {
        &self.items
    }

    /// The items sorted by time of day, then name, for display.
    #[must_use]
    pub fn sorted(&self) -> Vec<&ReminderItem> {
        let mut sorted: Vec<&ReminderItem> = self.items.iter().collect();
        sorted.sort_by(|a, b| {
            a.time_of_day
                .cmp(&b.time_of_day)
                .then_with(|| a.name.cmp(&b.name))
        });
        sorted
    }

    /// Run one polling pass against the given wall clock.
    ///
    /// Every item whose time matches `now_hhmm` and whose recurrence is
    /// satisfied fires: its `lastFiredDate` moves to `today` and it is
    /// returned to the caller, which emits one signal per fired item and
    /// persists the book iff the result is non-empty. Items sharing a
    /// minute fire independently in the same pass.
    pub fn poll(&mut self, today: &str, now_hhmm: &str) -> Vec<FiredReminder> {
        let mut fired = Vec::new();

        for item in &mut self.items {
            if item.is_due(today, now_hhmm) {
                item.mark_fired(today);
                fired.push(FiredReminder {
                    name: item.name.clone(),
                    time_of_day: item.time_of_day.clone(),
                });
            }
        }

        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book_with(items: Vec<ReminderItem>) -> ReminderBook {
        ReminderBook::from_items(items)
    }

    #[test]
    fn test_add_rejects_empty_name() {
        let mut book = ReminderBook::default();

        assert!(book.add("", "08:00", Frequency::Daily).is_err());
        assert!(book.add("   ", "08:00", Frequency::Daily).is_err());
        assert!(book.is_empty());
    }

    #[test]
    fn test_add_rejects_invalid_time() {
        let mut book = ReminderBook::default();

        assert!(book.add("Vitamin D", "8:00", Frequency::Daily).is_err());
        assert!(book.add("Vitamin D", "25:00", Frequency::Daily).is_err());
        assert!(book.is_empty());
    }

    #[test]
    fn test_add_trims_name() {
        let mut book = ReminderBook::default();
        let item = book.add("  Vitamin D  ", "08:00", Frequency::Daily).unwrap();

        assert_eq!(item.name, "Vitamin D");
    }

    #[test]
    fn test_remove_by_id() {
        let mut book = ReminderBook::default();
        let id = book
            .add("Vitamin D", "08:00", Frequency::Daily)
            .unwrap()
            .id
            .clone();
        book.add("Zinc", "21:00", Frequency::Daily).unwrap();

        assert!(book.remove(&id));
        assert_eq!(book.len(), 1);
        assert!(!book.remove(&id));
    }

    #[test]
    fn test_sorted_by_time_then_name() {
        let mut book = ReminderBook::default();
        book.add("Zinc", "21:00", Frequency::Daily).unwrap();
        book.add("Vitamin D", "08:00", Frequency::Daily).unwrap();
        book.add("Creatine", "08:00", Frequency::Daily).unwrap();

        let names: Vec<&str> = book.sorted().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Creatine", "Vitamin D", "Zinc"]);
    }

    #[test]
    fn test_poll_fires_matching_minute_once_per_day() {
        let mut book = ReminderBook::default();
        book.add("Vitamin D", "08:00", Frequency::Daily).unwrap();

        let fired = book.poll("2024-01-02", "08:00");
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].name, "Vitamin D");
        assert_eq!(book.items()[0].last_fired_date, "2024-01-02");

        // Repeated polls in the same minute, and later the same day, stay quiet.
        assert!(book.poll("2024-01-02", "08:00").is_empty());
        assert!(book.poll("2024-01-02", "08:00").is_empty());

        // The next day it fires again.
        let fired = book.poll("2024-01-03", "08:00");
        assert_eq!(fired.len(), 1);
        assert_eq!(book.items()[0].last_fired_date, "2024-01-03");
    }

    #[test]
    fn test_poll_respects_every_other_day() {
        let mut item = ReminderItem::new("Zinc", "21:30", Frequency::EveryOtherDay);
        item.mark_fired("2024-01-01");
        let mut book = book_with(vec![item]);

        assert!(book.poll("2024-01-02", "21:30").is_empty());

        let fired = book.poll("2024-01-03", "21:30");
        assert_eq!(fired.len(), 1);
    }

    #[test]
    fn test_poll_fires_shared_minute_independently() {
        let mut book = ReminderBook::default();
        book.add("Vitamin D", "08:00", Frequency::Daily).unwrap();
        book.add("Creatine", "08:00", Frequency::Daily).unwrap();
        book.add("Zinc", "21:00", Frequency::Daily).unwrap();

        let fired = book.poll("2024-01-02", "08:00");
        let mut names: Vec<String> = fired.into_iter().map(|f| f.name).collect();
        names.sort();

        assert_eq!(names, vec!["Creatine", "Vitamin D"]);
    }

    #[test]
    fn test_poll_off_minute_is_quiet() {
        let mut book = ReminderBook::default();
        book.add("Vitamin D", "08:00", Frequency::Daily).unwrap();

        assert!(book.poll("2024-01-02", "07:59").is_empty());
        assert!(book.poll("2024-01-02", "08:01").is_empty());
    }

    #[test]
    fn test_from_items_normalizes() {
        let legacy = ReminderItem {
            id: String::new(),
            name: String::new(),
            time_of_day: "late".to_string(),
            interval_days: 0,
            last_fired_date: String::new(),
        };
        let book = book_with(vec![legacy]);
        let item = &book.items()[0];

        assert!(!item.id.is_empty());
        assert_eq!(item.name, "Supplement");
        assert_eq!(item.time_of_day, "08:00");
        assert_eq!(item.interval_days, 1);
    }
}
