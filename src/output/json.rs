//! JSON output formatting for restbell.

use serde::Serialize;
use serde_json::json;

use crate::error::RestbellError;
use crate::features::reminders::ReminderBook;

/// Format the reminder list as JSON.
///
/// # Errors
///
/// Returns `RestbellError::Parse` if JSON serialization fails.
pub fn format_reminders_json(book: &ReminderBook) -> Result<String, RestbellError> {
    let items: Vec<_> = book.sorted().into_iter().collect();
    let output = json!({
        "count": items.len(),
        "items": items
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type.
///
/// # Errors
///
/// Returns `RestbellError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, RestbellError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::reminders::Frequency;

    #[test]
    fn test_format_reminders_json_empty() {
        let book = ReminderBook::default();
        let result = format_reminders_json(&book).unwrap();

        assert!(result.contains("\"count\": 0"));
        assert!(result.contains("\"items\": []"));
    }

    #[test]
    fn test_format_reminders_json_fields() {
        let mut book = ReminderBook::default();
        book.add("Vitamin D", "08:00", Frequency::Daily).unwrap();
        let result = format_reminders_json(&book).unwrap();

        assert!(result.contains("\"count\": 1"));
        assert!(result.contains("\"name\": \"Vitamin D\""));
        assert!(result.contains("\"timeOfDay\": \"08:00\""));
        assert!(result.contains("\"intervalDays\": 1"));
        assert!(result.contains("\"lastFiredDate\": \"\""));
    }

    #[test]
    fn test_format_reminders_json_sorted_by_time() {
        let mut book = ReminderBook::default();
        book.add("Zinc", "21:00", Frequency::Daily).unwrap();
        book.add("Vitamin D", "08:00", Frequency::Daily).unwrap();
        let result = format_reminders_json(&book).unwrap();

        let vitamin = result.find("Vitamin D").unwrap();
        let zinc = result.find("Zinc").unwrap();
        assert!(vitamin < zinc);
    }

    #[test]
    fn test_to_json_generic() {
        let names = vec!["a", "b"];
        let result = to_json(&names).unwrap();

        assert!(result.contains("\"a\""));
        assert!(result.contains("\"b\""));
    }
}
