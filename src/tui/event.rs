//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyModifiers};

use crate::error::RestbellError;
use crate::tui::app::{App, FormField, Tab};

/// Action to take after handling an event.
pub enum Action {
    /// Quit the application.
    Quit,
}

/// Handle terminal events.
///
/// Returns an action to take, or None if no action is needed. The poll
/// timeout is short so the countdown keeps ticking between key presses.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events(app: &mut App) -> Result<Option<Action>, RestbellError> {
    if event::poll(Duration::from_millis(100))
        .map_err(|e| RestbellError::Config(format!("Event poll failed: {e}")))?
    {
        if let Event::Key(key) = event::read()
            .map_err(|e| RestbellError::Config(format!("Event read failed: {e}")))?
        {
            // Handle Ctrl+C
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Ok(Some(Action::Quit));
            }

            // The add form captures all input while open.
            if app.form.is_some() {
                handle_form_key(app, key.code);
                return Ok(None);
            }

            // Clear-all confirmation captures y/n.
            if app.confirm_clear {
                match key.code {
                    KeyCode::Char('y' | 'Y') => app.confirm_clear_all(),
                    _ => app.cancel_clear(),
                }
                return Ok(None);
            }

            match key.code {
                // Quit
                KeyCode::Char('q') | KeyCode::Esc => return Ok(Some(Action::Quit)),

                // Tab switching
                KeyCode::Tab => {
                    let next = match app.tab {
                        Tab::Timer => Tab::Supplements,
                        Tab::Supplements => Tab::Timer,
                    };
                    app.switch_tab(next);
                }
                KeyCode::Char('1') => app.switch_tab(Tab::Timer),
                KeyCode::Char('2') => app.switch_tab(Tab::Supplements),

                // Help
                KeyCode::Char('?') => {
                    app.status = Some(help_line(app.tab).to_string());
                }

                _ => match app.tab {
                    Tab::Timer => handle_timer_key(app, key.code),
                    Tab::Supplements => handle_supplements_key(app, key.code),
                },
            }
        }
    }

    Ok(None)
}

/// Keys on the timer screen.
fn handle_timer_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char(' ') => app.toggle_timer(),
        KeyCode::Char('r') => app.reset_timer(),
        KeyCode::Left | KeyCode::Char('h') => app.cycle_preset(false),
        KeyCode::Right | KeyCode::Char('l') => app.cycle_preset(true),
        KeyCode::Char('+' | '=') => app.increment_sets(),
        KeyCode::Char('-') => app.decrement_sets(),
        KeyCode::Char('d') | KeyCode::Enter => app.complete_set(),
        _ => {}
    }
}

/// Keys on the supplements screen.
fn handle_supplements_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('a') => app.open_form(),
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_previous(),
        KeyCode::Char('x') | KeyCode::Delete => app.delete_selected(),
        KeyCode::Char('t') => app.test_signal(),
        KeyCode::Char('C') => app.request_clear(),
        _ => {}
    }
}

/// Keys while the add form is open.
fn handle_form_key(app: &mut App, code: KeyCode) {
    let on_last_field = app
        .form
        .as_ref()
        .is_some_and(|form| form.field == FormField::Frequency);

    match code {
        KeyCode::Esc => app.cancel_form(),
        KeyCode::Tab => app.form_next_field(),
        KeyCode::Enter => {
            if on_last_field {
                app.submit_form();
            } else {
                app.form_next_field();
            }
        }
        KeyCode::Backspace => app.form_backspace(),
        KeyCode::Char(' ') if on_last_field => app.form_toggle_frequency(),
        KeyCode::Left | KeyCode::Right if on_last_field => app.form_toggle_frequency(),
        KeyCode::Char(c) => app.form_input(c),
        _ => {}
    }
}

/// The help line for each screen.
const fn help_line(tab: Tab) -> &'static str {
    match tab {
        Tab::Timer => {
            "space:start/pause | r:reset | \u{2190}\u{2192}:preset | +/-:sets | d:set done | Tab:switch | q:quit"
        }
        Tab::Supplements => {
            "a:add | j/k:nav | x:delete | t:test | C:clear all | Tab:switch | q:quit"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_lines_cover_both_tabs() {
        assert!(help_line(Tab::Timer).contains("set done"));
        assert!(help_line(Tab::Supplements).contains("add"));
    }
}
