use colored::Colorize;

use crate::features::reminders::ReminderBook;

/// Format the reminder list as a pretty table
pub fn format_reminders_pretty(book: &ReminderBook, today: &str) -> String {
    if book.is_empty() {
        return "Supplements (0 items)\n  No reminders yet. Add one with 'restbell remind add'."
            .to_string();
    }

    let mut output = format!("Supplements ({} items)\n", book.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for item in book.sorted() {
        let status = if item.fired_on(today) {
            "fired today".green()
        } else {
            "not yet".yellow()
        };

        let mut line = format!(
            "{}  {}  {}",
            item.time_of_day.cyan(),
            item.name.bold(),
            item.frequency().label().dimmed()
        );
        line.push_str(&format!("  [{status}]"));
        line.push_str(&format!("  {}", item.id.dimmed()));

        output.push_str(&line);
        output.push('\n');
    }

    output
}
