//! Session façade: the single owned state object for one class session.
//!
//! `ClassSession` ties the sign-up sheet to the duty lottery: every
//! successful roster mutation invalidates an existing draw result, the
//! latest rejection is kept for display, and roster changes are refused
//! while a draw is revealing (the draw reads a snapshot taken at start).
//! A front end holds exactly one of these; there are no ambient globals.

use std::time::Instant;

use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use crate::error::{SignupError, SignupResult};
use crate::lottery::{DrawState, Lottery, Role, Winner};
use crate::schedule::{self, AgendaItem};
use crate::sheet::{SignupSheet, Slot, Student};

/// Configuration for a class session.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionConfig {
    /// RNG seed for reproducible draws. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl SessionConfig {
    /// Fix the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// The in-memory state of one class session.
///
/// All data is ephemeral: nothing is saved and nothing survives process
/// exit. The report export below is a one-shot snapshot for sharing, not
/// persistence.
#[derive(Debug)]
pub struct ClassSession {
    sheet: SignupSheet,
    lottery: Lottery,
    rng: StdRng,
    last_error: Option<SignupError>,
}

/// Snapshot shape written by [`ClassSession::export_json`].
#[derive(Debug, Serialize)]
struct Report<'a> {
    generated_at: String,
    slots: &'a [Slot],
    roster: &'a [Student],
    winners: &'a [Winner],
}

impl ClassSession {
    /// Create a fresh session: empty sheet, idle lottery.
    pub fn new(config: SessionConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            sheet: SignupSheet::new(),
            lottery: Lottery::new(),
            rng,
            last_error: None,
        }
    }

    /// The fixed agenda table.
    pub fn agenda(&self) -> &'static [AgendaItem] {
        &schedule::AGENDA
    }

    /// All presentation slots in id order.
    pub fn slots(&self) -> &[Slot] {
        self.sheet.slots()
    }

    /// Registered students in registration order.
    pub fn roster(&self) -> &[Student] {
        self.sheet.roster()
    }

    /// Winners revealed so far, in reveal order.
    pub fn winners(&self) -> &[Winner] {
        self.lottery.winners()
    }

    /// Current draw state.
    pub fn draw_state(&self) -> DrawState {
        self.lottery.state()
    }

    /// The most recent rejection, kept until the next successful mutation.
    pub fn last_error(&self) -> Option<&SignupError> {
        self.last_error.as_ref()
    }

    /// Register a student name into a slot.
    ///
    /// On success the stored error is cleared and any existing draw result
    /// is invalidated back to `Idle`. On rejection the reason is stored
    /// for display and nothing changes. Refused outright while a draw is
    /// revealing.
    pub fn register(&mut self, slot_id: u32, raw_name: &str) -> SignupResult<Student> {
        if self.lottery.state() == DrawState::Drawing {
            let err = SignupError::DrawInProgress;
            self.last_error = Some(err.clone());
            return Err(err);
        }
        match self.sheet.register(slot_id, raw_name) {
            Ok(student) => {
                self.last_error = None;
                self.lottery.reset();
                Ok(student)
            }
            Err(err) => {
                self.last_error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Cancel the registration in a slot.
    ///
    /// Unoccupied or unknown slots are a silent no-op. A successful cancel
    /// clears the stored error and invalidates any existing draw result.
    /// Ignored while a draw is revealing.
    pub fn cancel(&mut self, slot_id: u32) -> Option<Student> {
        if self.lottery.state() == DrawState::Drawing {
            return None;
        }
        let removed = self.sheet.cancel(slot_id);
        if removed.is_some() {
            self.last_error = None;
            self.lottery.reset();
        }
        removed
    }

    /// Start the duty draw over the current roster.
    ///
    /// Guard no-op (returns `false`) when nobody is registered or a draw
    /// already ran. Pump [`ClassSession::tick`] afterwards to reveal.
    pub fn start_draw(&mut self, now: Instant) -> bool {
        self.lottery.start(self.sheet.roster(), &mut self.rng, now)
    }

    /// Advance the reveal to `now`. Returns whether new winners appeared.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.lottery.tick(now)
    }

    /// Duty drawn for a registered name, if any.
    pub fn duty_for(&self, name: &str) -> Option<Role> {
        self.lottery
            .winners()
            .iter()
            .find(|w| w.student.name == name)
            .map(|w| w.role)
    }

    /// Render the sheet and duty assignments as a markdown report.
    pub fn export_markdown(&self) -> String {
        let mut out = String::from("# Presentation sign-up\n\n");
        out.push_str(&format!(
            "Generated {}\n\n",
            Utc::now().format("%Y-%m-%d %H:%M UTC")
        ));

        if self.sheet.roster().is_empty() {
            out.push_str("No registrations.\n");
            return out;
        }

        out.push_str("| Slot | Time | Student | Duty |\n");
        out.push_str("|------|------|---------|------|\n");
        for slot in self.sheet.slots() {
            let Some(name) = slot.occupant.as_deref() else {
                continue;
            };
            let duty = self
                .duty_for(name)
                .map_or_else(|| "-".to_string(), |r| r.to_string());
            out.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                slot.id, slot.time, name, duty
            ));
        }
        out
    }

    /// Render the sheet and duty assignments as pretty-printed JSON.
    pub fn export_json(&self) -> serde_json::Result<String> {
        let report = Report {
            generated_at: Utc::now().to_rfc3339(),
            slots: self.sheet.slots(),
            roster: self.sheet.roster(),
            winners: self.lottery.winners(),
        };
        serde_json::to_string_pretty(&report)
    }
}
