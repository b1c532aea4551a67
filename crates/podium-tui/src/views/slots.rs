//! Sign-up panel: the ten presentation slots with the selection cursor.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::App;

/// Draw the slot list.
pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Sign-up ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 1 || inner.width < 20 {
        return;
    }

    let mut lines: Vec<Line<'static>> = Vec::new();
    for (i, slot) in app.session.slots().iter().enumerate() {
        let selected = i == app.selected_slot;
        let marker = if selected { "> " } else { "  " };

        let mut spans = vec![
            Span::styled(
                format!("{marker}{:>2}. {}  ", slot.id, slot.time),
                Style::default().fg(Color::White),
            ),
        ];
        match &slot.occupant {
            Some(name) => spans.push(Span::styled(
                name.clone(),
                Style::default().fg(Color::Green).bold(),
            )),
            None => spans.push(Span::styled(
                "open",
                Style::default().fg(Color::DarkGray).italic(),
            )),
        }

        let mut line = Line::from(spans);
        if selected {
            line = line.style(Style::default().bg(Color::DarkGray));
        }
        lines.push(line);
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
