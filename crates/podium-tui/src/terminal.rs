//! Terminal setup, teardown, and the main event loop.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;

use crate::app::App;
use crate::views;

/// How long to wait for input before advancing the reveal animation.
const TICK_RATE: Duration = Duration::from_millis(100);

/// Launch the TUI application.
pub fn run(mut app: App) -> Result<(), String> {
    enable_raw_mode().map_err(|e| format!("terminal error: {e}"))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| format!("terminal error: {e}"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| format!("terminal error: {e}"))?;

    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

/// Main event loop: draw, poll for input, pump the reveal.
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), String> {
    loop {
        terminal
            .draw(|frame| draw(frame, app))
            .map_err(|e| format!("draw error: {e}"))?;

        if app.should_quit {
            return Ok(());
        }

        if event::poll(TICK_RATE).map_err(|e| format!("event error: {e}"))? {
            let event = event::read().map_err(|e| format!("event error: {e}"))?;
            handle_event(app, event);
        }
        app.tick(Instant::now());
    }
}

/// Handle a crossterm event. Ctrl+C always quits.
fn handle_event(app: &mut App, event: Event) {
    if let Event::Key(key) = event
        && key.kind == KeyEventKind::Press
    {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            app.should_quit = true;
            return;
        }
        app.handle_key(key);
    }
}

/// Top-level layout and draw dispatch.
fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(0),    // Panels
            Constraint::Length(3), // Name input
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    let title = Line::from(Span::styled(
        " Podium  -  presentation sign-up and duty draw  (19:00-21:30)",
        Style::default().fg(Color::White).bold(),
    ));
    frame.render_widget(ratatui::widgets::Paragraph::new(title), chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(38), Constraint::Percentage(62)])
        .split(chunks[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(10)])
        .split(columns[0]);
    views::agenda::draw(frame, app, left[0]);
    views::lottery::draw(frame, app, left[1]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(12), Constraint::Min(0)])
        .split(columns[1]);
    views::slots::draw(frame, app, right[0]);
    views::results::draw(frame, app, right[1]);

    views::input::draw(frame, app, chunks[2], chunks[3]);

    if app.show_help {
        views::draw_help_popup(frame);
    }
}
