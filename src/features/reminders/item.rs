//! A single supplement reminder.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{days_between, parse_hhmm};

/// Fallback time of day for records with a malformed time.
const DEFAULT_TIME: &str = "08:00";

/// How often a reminder recurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Frequency {
    /// Fires every day.
    Daily,
    /// Fires at most every second day.
    EveryOtherDay,
}

impl Frequency {
    /// The recurrence period in days.
    #[must_use]
    pub const fn interval_days(self) -> u8 {
        match self {
            Self::Daily => 1,
            Self::EveryOtherDay => 2,
        }
    }

    /// Typed view over a persisted `intervalDays` value.
    ///
    /// Anything other than 2 reads as daily, matching how records from
    /// older versions (which had no interval field) are interpreted.
    #[must_use]
    pub const fn from_interval_days(days: u8) -> Self {
        match days {
            2 => Self::EveryOtherDay,
            _ => Self::Daily,
        }
    }

    /// Human-readable recurrence label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Daily => "every day",
            Self::EveryOtherDay => "every other day",
        }
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A named, time-of-day supplement reminder.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderItem {
    /// Unique id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Time of day this reminder fires, as 24-hour `HH:MM`.
    pub time_of_day: String,
    /// Recurrence period: 1 = daily, 2 = every other day.
    #[serde(default = "default_interval_days")]
    pub interval_days: u8,
    /// Date this reminder last fired (`YYYY-MM-DD`), or empty.
    #[serde(default)]
    pub last_fired_date: String,
}

const fn default_interval_days() -> u8 {
    1
}

impl ReminderItem {
    /// Create a reminder with a fresh id and no fire history.
    #[must_use]
    pub fn new(name: impl Into<String>, time_of_day: impl Into<String>, frequency: Frequency) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            time_of_day: time_of_day.into(),
            interval_days: frequency.interval_days(),
            last_fired_date: String::new(),
        }
    }

    /// Repair a record loaded from storage.
    ///
    /// Records written by older versions may lack an id or the interval
    /// field, and hand-edited files can hold anything. A blank id is
    /// regenerated, a blank name gets a placeholder, a malformed time
    /// falls back to 08:00 and the interval collapses to daily unless it
    /// is exactly every-other-day.
    pub fn normalize(&mut self) {
        if self.id.trim().is_empty() {
            self.id = Uuid::new_v4().to_string();
        }
        if self.name.trim().is_empty() {
            self.name = "Supplement".to_string();
        }
        match parse_hhmm(&self.time_of_day) {
            Some(time) => self.time_of_day = time,
            None => self.time_of_day = DEFAULT_TIME.to_string(),
        }
        if self.interval_days != 2 {
            self.interval_days = 1;
        }
    }

    /// The recurrence of this reminder.
    #[must_use]
    pub const fn frequency(&self) -> Frequency {
        Frequency::from_interval_days(self.interval_days)
    }

    /// Whether this reminder already fired on `today`.
    #[must_use]
    pub fn fired_on(&self, today: &str) -> bool {
        self.last_fired_date == today
    }

    /// Whether this reminder is due at `now_hhmm` on `today`.
    ///
    /// Due means: the wall clock matches the configured minute, the
    /// reminder has not fired today, and enough days have passed since
    /// the last fire. A reminder that has never fired is due on its
    /// first matching minute regardless of interval.
    #[must_use]
    pub fn is_due(&self, today: &str, now_hhmm: &str) -> bool {
        if self.time_of_day != now_hhmm {
            return false;
        }
        if self.fired_on(today) {
            return false;
        }
        if self.interval_days == 1 || self.last_fired_date.is_empty() {
            return true;
        }
        days_between(&self.last_fired_date, today)
            .is_some_and(|days| days >= i64::from(self.interval_days))
    }

    /// Record that this reminder fired on `today`.
    pub fn mark_fired(&mut self, today: &str) {
        self.last_fired_date = today.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_has_unique_id_and_no_history() {
        let a = ReminderItem::new("Vitamin D", "08:00", Frequency::Daily);
        let b = ReminderItem::new("Vitamin D", "08:00", Frequency::Daily);

        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
        assert!(a.last_fired_date.is_empty());
        assert_eq!(a.interval_days, 1);
    }

    #[test]
    fn test_frequency_round_trip() {
        assert_eq!(Frequency::from_interval_days(1), Frequency::Daily);
        assert_eq!(Frequency::from_interval_days(2), Frequency::EveryOtherDay);
        assert_eq!(Frequency::from_interval_days(0), Frequency::Daily);
        assert_eq!(Frequency::from_interval_days(7), Frequency::Daily);
        assert_eq!(Frequency::Daily.interval_days(), 1);
        assert_eq!(Frequency::EveryOtherDay.interval_days(), 2);
    }

    #[test]
    fn test_daily_item_due_on_matching_minute() {
        let item = ReminderItem::new("Vitamin D", "08:00", Frequency::Daily);

        assert!(item.is_due("2024-01-02", "08:00"));
        assert!(!item.is_due("2024-01-02", "08:01"));
    }

    #[test]
    fn test_item_not_due_twice_same_day() {
        let mut item = ReminderItem::new("Vitamin D", "08:00", Frequency::Daily);
        item.mark_fired("2024-01-02");

        assert!(!item.is_due("2024-01-02", "08:00"));
        assert!(item.is_due("2024-01-03", "08:00"));
    }

    #[test]
    fn test_every_other_day_interval() {
        let mut item = ReminderItem::new("Zinc", "21:30", Frequency::EveryOtherDay);
        item.mark_fired("2024-01-01");

        assert!(!item.is_due("2024-01-02", "21:30"));
        assert!(item.is_due("2024-01-03", "21:30"));
        assert!(item.is_due("2024-01-05", "21:30"));
    }

    #[test]
    fn test_every_other_day_never_fired_is_due() {
        let item = ReminderItem::new("Zinc", "21:30", Frequency::EveryOtherDay);
        assert!(item.is_due("2024-01-01", "21:30"));
    }

    #[test]
    fn test_normalize_repairs_legacy_record() {
        let mut item = ReminderItem {
            id: String::new(),
            name: "  ".to_string(),
            time_of_day: "8am".to_string(),
            interval_days: 7,
            last_fired_date: String::new(),
        };
        item.normalize();

        assert!(!item.id.is_empty());
        assert_eq!(item.name, "Supplement");
        assert_eq!(item.time_of_day, "08:00");
        assert_eq!(item.interval_days, 1);
    }

    #[test]
    fn test_normalize_keeps_valid_record() {
        let mut item = ReminderItem::new("Magnesium", "22:15", Frequency::EveryOtherDay);
        item.mark_fired("2024-03-01");
        let before = item.clone();
        item.normalize();

        assert_eq!(item.id, before.id);
        assert_eq!(item.name, before.name);
        assert_eq!(item.time_of_day, before.time_of_day);
        assert_eq!(item.interval_days, before.interval_days);
        assert_eq!(item.last_fired_date, before.last_fired_date);
    }

    #[test]
    fn test_serde_field_names_are_stable() {
        let item = ReminderItem::new("Vitamin D", "08:00", Frequency::Daily);
        let json = serde_json::to_string(&item).unwrap();

        assert!(json.contains("\"timeOfDay\""));
        assert!(json.contains("\"intervalDays\""));
        assert!(json.contains("\"lastFiredDate\""));
    }

    #[test]
    fn test_deserialize_record_without_interval_defaults_to_daily() {
        let json = r#"{"id":"x1","name":"Iron","timeOfDay":"09:00"}"#;
        let item: ReminderItem = serde_json::from_str(json).unwrap();

        assert_eq!(item.interval_days, 1);
        assert_eq!(item.last_fired_date, "");
        assert_eq!(item.frequency(), Frequency::Daily);
    }

    #[test]
    fn test_round_trip_preserves_all_fields() {
        let mut item = ReminderItem::new("Omega 3", "12:45", Frequency::EveryOtherDay);
        item.mark_fired("2024-06-30");

        let json = serde_json::to_string(&item).unwrap();
        let loaded: ReminderItem = serde_json::from_str(&json).unwrap();

        assert_eq!(loaded.id, item.id);
        assert_eq!(loaded.name, item.name);
        assert_eq!(loaded.time_of_day, item.time_of_day);
        assert_eq!(loaded.interval_days, item.interval_days);
        assert_eq!(loaded.last_fired_date, item.last_fired_date);
    }
}
