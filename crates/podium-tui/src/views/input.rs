//! Name input line with cursor, and the status bar.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::App;

/// Draw the input field and the status bar below it.
pub fn draw(frame: &mut Frame, app: &App, input_area: Rect, status_area: Rect) {
    let display_text = format!("> {}", app.input_text);
    let input = Paragraph::new(display_text).block(
        Block::default()
            .title(" Name ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green)),
    );
    frame.render_widget(input, input_area);

    // Cursor: offset by 2 for "> " prefix, plus 1 for the left border.
    let cursor_x = input_area.x + 1 + 2 + app.input_cursor as u16;
    let cursor_y = input_area.y + 1;
    if cursor_x < input_area.x + input_area.width - 1 {
        frame.set_cursor_position(Position::new(cursor_x, cursor_y));
    }

    frame.render_widget(status_line(app), status_area);
}

/// Status bar: the stored rejection, a transient notice, or key hints.
fn status_line(app: &App) -> Paragraph<'static> {
    if let Some(err) = app.session.last_error() {
        return Paragraph::new(Line::from(Span::styled(
            format!(" {err}"),
            Style::default().fg(Color::Red).bold(),
        )));
    }
    if let Some(status) = &app.status {
        return Paragraph::new(Line::from(Span::styled(
            format!(" {status}"),
            Style::default().fg(Color::Cyan),
        )));
    }

    let hint = |key: &'static str| Span::styled(key, Style::default().fg(Color::Yellow));
    Paragraph::new(Line::from(vec![
        hint(" \u{2191}\u{2193}"),
        Span::raw(":slot  "),
        hint("Enter"),
        Span::raw(":register  "),
        hint("Del"),
        Span::raw(":cancel  "),
        hint("Ctrl+L"),
        Span::raw(":draw  "),
        hint("Ctrl+E"),
        Span::raw(":report  "),
        hint("?"),
        Span::raw(":help  "),
        hint("Ctrl+C"),
        Span::raw(":quit"),
    ]))
    .style(Style::default().fg(Color::DarkGray))
}
