//! Application state: the session handle, name input, and slot selection.

use std::path::PathBuf;
use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use podium_core::{ClassSession, DrawState};

/// State for the single-screen UI.
pub struct App {
    /// The core engine; the only mutable state the UI holds a handle to.
    pub session: ClassSession,
    /// Current name input text.
    pub input_text: String,
    /// Cursor position within the input text (byte offset).
    pub input_cursor: usize,
    /// Index of the selected slot row.
    pub selected_slot: usize,
    /// Where Ctrl+E writes the markdown report.
    pub report_path: PathBuf,
    /// Transient notice shown in the status bar (report written, etc.).
    pub status: Option<String>,
    /// Whether the help popup is visible.
    pub show_help: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl App {
    /// Create the app around a fresh session.
    pub fn new(session: ClassSession, report_path: PathBuf) -> Self {
        Self {
            session,
            input_text: String::new(),
            input_cursor: 0,
            selected_slot: 0,
            report_path,
            status: None,
            show_help: false,
            should_quit: false,
        }
    }

    /// Whether a draw is currently revealing.
    pub fn drawing(&self) -> bool {
        self.session.draw_state() == DrawState::Drawing
    }

    /// Advance the reveal animation.
    pub fn tick(&mut self, now: Instant) {
        self.session.tick(now);
    }

    /// Handle a key press. Ctrl+C is handled by the event loop.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('l') => self.start_draw(),
                KeyCode::Char('e') => self.write_report(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Enter => self.register_selected(),
            KeyCode::Delete => self.cancel_selected(),
            KeyCode::Up => self.select_prev(),
            KeyCode::Down => self.select_next(),
            KeyCode::Esc => {
                if self.show_help {
                    self.show_help = false;
                } else if !self.input_text.is_empty() {
                    self.input_text.clear();
                    self.input_cursor = 0;
                }
            }
            KeyCode::Backspace => self.backspace(),
            KeyCode::Left => self.cursor_left(),
            KeyCode::Right => self.cursor_right(),
            KeyCode::Home => self.input_cursor = 0,
            KeyCode::End => self.input_cursor = self.input_text.len(),
            KeyCode::Char('?') if self.input_text.is_empty() => {
                self.show_help = !self.show_help;
            }
            KeyCode::Char(c) => self.push_char(c),
            _ => {}
        }
    }

    /// Move the slot selection up.
    fn select_prev(&mut self) {
        if self.selected_slot > 0 {
            self.selected_slot -= 1;
        }
    }

    /// Move the slot selection down.
    fn select_next(&mut self) {
        if self.selected_slot + 1 < self.session.slots().len() {
            self.selected_slot += 1;
        }
    }

    /// Register the input name into the selected slot. No-op while a
    /// draw is revealing.
    fn register_selected(&mut self) {
        if self.drawing() {
            return;
        }
        let Some(slot) = self.session.slots().get(self.selected_slot) else {
            return;
        };
        let slot_id = slot.id;
        self.status = None;
        if self.session.register(slot_id, &self.input_text).is_ok() {
            self.input_text.clear();
            self.input_cursor = 0;
        }
    }

    /// Cancel the registration in the selected slot.
    fn cancel_selected(&mut self) {
        if self.drawing() {
            return;
        }
        let Some(slot) = self.session.slots().get(self.selected_slot) else {
            return;
        };
        let slot_id = slot.id;
        if self.session.cancel(slot_id).is_some() {
            self.status = None;
        }
    }

    /// Start the duty draw.
    fn start_draw(&mut self) {
        if self.session.start_draw(Instant::now()) {
            self.status = None;
        }
    }

    /// Write the markdown report to the configured path.
    fn write_report(&mut self) {
        let report = self.session.export_markdown();
        self.status = Some(match std::fs::write(&self.report_path, report) {
            Ok(()) => format!("report written to {}", self.report_path.display()),
            Err(e) => format!("could not write report: {e}"),
        });
    }

    /// Insert a character at the cursor.
    fn push_char(&mut self, c: char) {
        self.input_text.insert(self.input_cursor, c);
        self.input_cursor += c.len_utf8();
    }

    /// Delete the character before the cursor.
    fn backspace(&mut self) {
        if self.input_cursor > 0 {
            let prev = self.input_text[..self.input_cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.input_text.remove(prev);
            self.input_cursor = prev;
        }
    }

    /// Move the cursor one character left.
    fn cursor_left(&mut self) {
        if self.input_cursor > 0 {
            let prev = self.input_text[..self.input_cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.input_cursor = prev;
        }
    }

    /// Move the cursor one character right.
    fn cursor_right(&mut self) {
        if self.input_cursor < self.input_text.len() {
            let next = self.input_text[self.input_cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.input_cursor + i)
                .unwrap_or(self.input_text.len());
            self.input_cursor = next;
        }
    }
}
