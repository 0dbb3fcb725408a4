//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs},
    Frame,
};

use crate::core::{preset_label, today_string};
use crate::features::timer::PRESETS;
use crate::tui::app::{App, FormField, Tab};

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    // Create layout: tab bar, body, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tabs
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_tabs(frame, app, chunks[0]);
    match app.tab {
        Tab::Timer => render_timer(frame, app, chunks[1]),
        Tab::Supplements => render_supplements(frame, app, chunks[1]),
    }
    render_status_bar(frame, app, chunks[2]);
}

/// Render the tab bar.
fn render_tabs(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let selected = match app.tab {
        Tab::Timer => 0,
        Tab::Supplements => 1,
    };

    let tabs = Tabs::new(vec![" [1] Timer ", " [2] Supplements "])
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" restbell "),
        );

    frame.render_widget(tabs, area);
}

/// Render the rest timer screen.
fn render_timer(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Preset chips
            Constraint::Length(3), // Countdown
            Constraint::Length(2), // Set counter
            Constraint::Min(0),    // Controls hint
        ])
        .split(area);

    render_presets(frame, app, sections[0]);

    let time_style = if app.timer.is_running() {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else if app.timer.remaining() == 0 {
        Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    };

    let countdown = Paragraph::new(app.timer.format_remaining())
        .style(time_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" rest "));
    frame.render_widget(countdown, sections[1]);

    let sets = Paragraph::new(format!("Set {}", app.timer.format_sets()))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center);
    frame.render_widget(sets, sections[2]);

    let state = if app.timer.is_running() {
        "resting..."
    } else if app.timer.remaining() == 0 {
        "rest over - go lift!"
    } else {
        "paused"
    };
    let hint = Paragraph::new(vec![
        Line::from(state),
        Line::from(""),
        Line::from(Span::styled(
            "space start/pause | r reset | \u{2190}\u{2192} preset | +/- sets | d set done",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(hint, sections[3]);
}

/// Render the preset chips with the active one highlighted.
fn render_presets(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let mut spans = Vec::new();
    for preset in PRESETS {
        let label = format!(" {} ", preset_label(preset));
        if preset == app.timer.selected() {
            spans.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(label, Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::raw(" "));
    }

    let chips = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" presets "));
    frame.render_widget(chips, area);
}

/// Render the supplements screen.
fn render_supplements(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let has_form = app.form.is_some();
    let constraints = if has_form {
        vec![Constraint::Length(3), Constraint::Min(0)]
    } else {
        vec![Constraint::Min(0)]
    };
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    if let Some(form) = &app.form {
        let field = |f: FormField, text: &str| -> Span<'static> {
            let style = if form.field == f {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default()
            };
            Span::styled(text.to_string(), style)
        };

        let line = Line::from(vec![
            Span::raw("name: "),
            field(
                FormField::Name,
                if form.name.is_empty() { "_" } else { form.name.as_str() },
            ),
            Span::raw("   time: "),
            field(
                FormField::Time,
                if form.time.is_empty() { "_" } else { form.time.as_str() },
            ),
            Span::raw("   freq: "),
            field(FormField::Frequency, form.frequency.label()),
        ]);

        let form_widget = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" add reminder (Tab: next field, Enter: save, Esc: cancel) "),
        );
        frame.render_widget(form_widget, sections[0]);
    }

    let list_area = if has_form { sections[1] } else { sections[0] };
    let today = today_string();

    let items: Vec<ListItem<'_>> = app
        .book
        .sorted()
        .into_iter()
        .map(|item| {
            let status = if item.fired_on(&today) {
                Span::styled("fired today", Style::default().fg(Color::Green))
            } else {
                Span::styled("not yet", Style::default().fg(Color::Yellow))
            };

            let spans = vec![
                Span::styled(
                    item.time_of_day.clone(),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw("  "),
                Span::styled(item.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
                Span::raw("  "),
                Span::styled(
                    item.frequency().label(),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw("  "),
                status,
            ];

            ListItem::new(Line::from(spans))
        })
        .collect();

    let title = format!(" supplements ({}) ", app.book.len());
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().bg(Color::DarkGray));

    let mut state = ListState::default();
    if !app.book.is_empty() {
        state.select(Some(app.selected.min(app.book.len() - 1)));
    }

    frame.render_stateful_widget(list, list_area, &mut state);
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let status_text = app
        .status
        .as_deref()
        .unwrap_or("Tab:switch | ?:help | q:quit");

    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}
