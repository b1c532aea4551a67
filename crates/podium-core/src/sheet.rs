//! The sign-up sheet: presentation slots and the student roster.
//!
//! The sheet owns both sides of the registration invariant: the roster is
//! always exactly the set of names currently occupying a slot, a trimmed
//! name occupies at most one slot (case-insensitive), and student ids are
//! assigned in strictly increasing order and never reused.

use serde::{Deserialize, Serialize};

use crate::error::{SignupError, SignupResult};
use crate::schedule;

/// A registered student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Unique id, strictly increasing across the session.
    pub id: u32,
    /// Display name as registered (already trimmed).
    pub name: String,
}

/// A fixed presentation time slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slot {
    /// Stable slot id, 1-based.
    pub id: u32,
    /// Fixed display time, e.g. "19:05".
    pub time: String,
    /// Name of the registered student, if any.
    pub occupant: Option<String>,
}

/// The sign-up sheet. Slots are created once with fixed ids and times;
/// only occupancy and the roster ever change.
#[derive(Debug, Clone)]
pub struct SignupSheet {
    slots: Vec<Slot>,
    roster: Vec<Student>,
    next_student_id: u32,
}

impl Default for SignupSheet {
    fn default() -> Self {
        Self::new()
    }
}

impl SignupSheet {
    /// Create a sheet with the fixed slot layout and an empty roster.
    pub fn new() -> Self {
        let slots = schedule::slot_times()
            .into_iter()
            .enumerate()
            .map(|(i, time)| Slot {
                id: i as u32 + 1,
                time,
                occupant: None,
            })
            .collect();
        Self {
            slots,
            roster: Vec::new(),
            next_student_id: 1,
        }
    }

    /// All slots in id order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Registered students, in registration order.
    pub fn roster(&self) -> &[Student] {
        &self.roster
    }

    /// Look up a slot by id.
    pub fn slot(&self, slot_id: u32) -> Option<&Slot> {
        self.slots.iter().find(|s| s.id == slot_id)
    }

    /// Number of registered students.
    pub fn registered_count(&self) -> usize {
        self.roster.len()
    }

    /// Whether a name is already on the roster (case-insensitive).
    pub fn is_registered(&self, name: &str) -> bool {
        let lower = name.to_lowercase();
        self.roster.iter().any(|s| s.name.to_lowercase() == lower)
    }

    /// Register `raw_name` into the given slot.
    ///
    /// The name is trimmed first. Rejections leave the sheet untouched:
    /// unknown slot, empty name, duplicate name (case-insensitive), or an
    /// already-occupied slot. On success the new [`Student`] is returned
    /// with the next monotone id.
    pub fn register(&mut self, slot_id: u32, raw_name: &str) -> SignupResult<Student> {
        let idx = self
            .slots
            .iter()
            .position(|s| s.id == slot_id)
            .ok_or(SignupError::UnknownSlot(slot_id))?;

        let name = raw_name.trim();
        if name.is_empty() {
            return Err(SignupError::EmptyName);
        }
        if self.is_registered(name) {
            return Err(SignupError::DuplicateName(name.to_string()));
        }
        if self.slots[idx].occupant.is_some() {
            return Err(SignupError::SlotTaken(slot_id));
        }

        let student = Student {
            id: self.next_student_id,
            name: name.to_string(),
        };
        self.next_student_id += 1;
        self.slots[idx].occupant = Some(student.name.clone());
        self.roster.push(student.clone());
        Ok(student)
    }

    /// Cancel the registration in the given slot.
    ///
    /// Unknown or unoccupied slots are a silent no-op (`None`). Otherwise
    /// the occupant is cleared and the matching roster entry (exact match
    /// on the stored name) is removed and returned.
    pub fn cancel(&mut self, slot_id: u32) -> Option<Student> {
        let slot = self.slots.iter_mut().find(|s| s.id == slot_id)?;
        let name = slot.occupant.take()?;
        let idx = self.roster.iter().position(|s| s.name == name)?;
        Some(self.roster.remove(idx))
    }
}
