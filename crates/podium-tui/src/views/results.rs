//! Live results table: occupied slots with their drawn duties.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::App;
use crate::views::role_color;

/// Draw the results table.
pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Results ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 2 || inner.width < 24 {
        return;
    }

    let occupied: Vec<_> = app
        .session
        .slots()
        .iter()
        .filter(|s| s.occupant.is_some())
        .collect();

    if occupied.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "Nobody has signed up yet.",
            Style::default().fg(Color::DarkGray).italic(),
        )));
        frame.render_widget(empty, inner);
        return;
    }

    let mut lines: Vec<Line<'static>> = vec![Line::from(Span::styled(
        format!("{:<8}{:<20}{}", "Time", "Student", "Duty"),
        Style::default().fg(Color::DarkGray),
    ))];

    for slot in occupied {
        let Some(name) = slot.occupant.as_deref() else {
            continue;
        };
        let mut spans = vec![
            Span::styled(
                format!("{:<8}", slot.time),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                format!("{name:<20}"),
                Style::default().fg(Color::White),
            ),
        ];
        match app.session.duty_for(name) {
            Some(role) => spans.push(Span::styled(
                role.to_string(),
                Style::default().fg(role_color(role)).bold(),
            )),
            None => spans.push(Span::styled("-", Style::default().fg(Color::DarkGray))),
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
