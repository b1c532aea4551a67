//! Agenda panel: the fixed schedule for the evening.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::App;

/// Draw the agenda table.
pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Agenda ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 2 || inner.width < 20 {
        return;
    }

    let mut lines: Vec<Line<'static>> = Vec::new();
    for item in app.session.agenda() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<15}", item.time),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(item.activity, Style::default().fg(Color::White)),
            Span::styled(
                format!("  ({})", item.duration),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
