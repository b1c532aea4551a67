//! Panel renderers for the single-screen layout, plus shared popups.

/// Agenda panel: the fixed schedule table.
pub mod agenda;
/// Name input line and status bar.
pub mod input;
/// Duty draw panel with the six seat rows.
pub mod lottery;
/// Live results table.
pub mod results;
/// Sign-up panel: the ten presentation slots.
pub mod slots;

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use podium_core::Role;

/// Accent color for a duty role, consistent across panels.
pub fn role_color(role: Role) -> Color {
    match role {
        Role::Videographer => Color::Cyan,
        Role::NoteTaker => Color::Yellow,
        Role::CleaningDuty => Color::Magenta,
    }
}

/// Create a centered rectangle as a percentage of the given area.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Draw the help popup overlay.
pub fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(55, 60, frame.area());

    let help_text = vec![
        Line::from("Keyboard Shortcuts").style(Style::default().bold()),
        Line::from(""),
        Line::from("  Type        Edit the name field"),
        Line::from("  Up / Down   Select a slot"),
        Line::from("  Enter       Register the name into the slot"),
        Line::from("  Delete      Cancel the slot's registration"),
        Line::from("  Ctrl+L      Draw duties"),
        Line::from("  Ctrl+E      Write the markdown report"),
        Line::from("  Esc         Clear input / close help"),
        Line::from(""),
        Line::from("  ?           Toggle this help (empty input)"),
        Line::from("  Ctrl+C      Quit"),
    ];

    let popup = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}
