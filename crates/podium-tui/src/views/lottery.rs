//! Duty draw panel: one row per seat, filled in as winners reveal.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use podium_core::{DrawState, Role, Winner};

use crate::app::App;
use crate::views::role_color;

/// Draw the lottery panel.
pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Duty draw ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 2 || inner.width < 20 {
        return;
    }

    let mut lines: Vec<Line<'static>> = vec![caption(app), Line::from("")];

    let winners = app.session.winners();
    let drawing = app.session.draw_state() == DrawState::Drawing;
    for role in Role::ALL {
        let drawn: Vec<&Winner> = winners.iter().filter(|w| w.role == role).collect();
        for i in 0..role.headcount() {
            let mut spans = vec![Span::styled(
                format!("  {:<14}", role.to_string()),
                Style::default().fg(role_color(role)),
            )];
            match drawn.get(i) {
                Some(w) => spans.push(Span::styled(
                    w.student.name.clone(),
                    Style::default().fg(role_color(role)).bold(),
                )),
                None => spans.push(Span::styled(
                    if drawing { "..." } else { "waiting" },
                    Style::default().fg(Color::DarkGray).italic(),
                )),
            }
            lines.push(Line::from(spans));
        }
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// One-line caption describing what the draw is doing.
fn caption(app: &App) -> Line<'static> {
    let (text, color) = match app.session.draw_state() {
        DrawState::Idle if app.session.roster().is_empty() => {
            ("Register at least one student to draw.", Color::DarkGray)
        }
        DrawState::Idle => ("Press Ctrl+L to draw duties.", Color::Green),
        DrawState::Drawing => ("Drawing...", Color::Yellow),
        DrawState::Completed => ("Draw complete.", Color::Green),
    };
    Line::from(Span::styled(text, Style::default().fg(color)))
}
