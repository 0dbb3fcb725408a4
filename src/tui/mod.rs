//! Terminal User Interface (TUI) for restbell.
//!
//! Provides the interactive two-tab interface (rest timer and supplement
//! reminders). Built with ratatui and crossterm.

mod app;
mod event;
mod ui;

pub use app::App;

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::config::Config;
use crate::error::RestbellError;

/// Run the TUI application.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run(config: &Config) -> Result<(), RestbellError> {
    // Setup terminal
    enable_raw_mode()
        .map_err(|e| RestbellError::Config(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .map_err(|e| RestbellError::Config(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| RestbellError::Config(format!("Failed to create terminal: {e}")))?;

    // Create app state and run main loop
    let mut app = App::new(config)?;
    let result = run_app(&mut terminal, &mut app, config);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();

    result
}

/// Run the main application loop.
///
/// Key events are polled with a short timeout; the countdown advances
/// once per second and the reminder poll runs on its configured
/// interval, both measured against monotonic clocks.
fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    config: &Config,
) -> Result<(), RestbellError> {
    let tick_rate = Duration::from_secs(1);
    let poll_rate = Duration::from_secs(config.reminders.poll_interval_seconds.max(1));
    let mut last_tick = Instant::now();
    let mut last_poll = Instant::now();

    loop {
        // Draw UI
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| RestbellError::Config(format!("Failed to draw: {e}")))?;

        // Handle events
        if let Some(action) = event::handle_events(app)? {
            match action {
                event::Action::Quit => break,
            }
        }

        // Countdown tick
        if last_tick.elapsed() >= tick_rate {
            app.tick_second();
            last_tick = Instant::now();
        }

        // Reminder poll
        if last_poll.elapsed() >= poll_rate {
            app.poll_reminders();
            last_poll = Instant::now();
        }
    }

    Ok(())
}
