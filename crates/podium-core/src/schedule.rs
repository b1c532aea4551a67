//! The fixed evening schedule: agenda table and presentation slot times.
//!
//! Nothing here is user-editable. The agenda is static display data; the
//! slot times are computed once at startup from the two session anchors.

use chrono::{NaiveTime, TimeDelta};

/// One row of the fixed session agenda.
#[derive(Debug, Clone, Copy)]
pub struct AgendaItem {
    /// Time range, e.g. "19:00 - 19:05".
    pub time: &'static str,
    /// What happens in this block.
    pub activity: &'static str,
    /// Display duration, e.g. "5 min".
    pub duration: &'static str,
}

/// The agenda for the session, in order.
pub const AGENDA: [AgendaItem; 6] = [
    AgendaItem {
        time: "19:00 - 19:05",
        activity: "Opening and format briefing",
        duration: "5 min",
    },
    AgendaItem {
        time: "19:05 - 19:55",
        activity: "First five presentations with feedback",
        duration: "50 min",
    },
    AgendaItem {
        time: "19:55 - 20:05",
        activity: "Break",
        duration: "10 min",
    },
    AgendaItem {
        time: "20:05 - 20:55",
        activity: "Last five presentations with feedback",
        duration: "50 min",
    },
    AgendaItem {
        time: "20:55 - 21:25",
        activity: "Instructor wrap-up and open discussion",
        duration: "30 min",
    },
    AgendaItem {
        time: "21:25 - 21:30",
        activity: "Closing and follow-up assignments",
        duration: "5 min",
    },
];

/// Presentation slots per session block.
pub const SLOTS_PER_SESSION: usize = 5;

/// Minutes between consecutive slots within a block.
pub const SLOT_INTERVAL_MINUTES: i64 = 11;

/// Start times (hour, minute) of the two presentation blocks.
const SESSION_STARTS: [(u32, u32); 2] = [(19, 5), (20, 5)];

/// Total number of presentation slots on the sheet.
pub const SLOT_COUNT: usize = SLOTS_PER_SESSION * SESSION_STARTS.len();

/// Compute the display time label for every slot, in slot-id order.
pub fn slot_times() -> Vec<String> {
    let mut times = Vec::with_capacity(SLOT_COUNT);
    for (hour, minute) in SESSION_STARTS {
        let Some(start) = NaiveTime::from_hms_opt(hour, minute, 0) else {
            continue;
        };
        for i in 0..SLOTS_PER_SESSION {
            let t = start + TimeDelta::minutes(i as i64 * SLOT_INTERVAL_MINUTES);
            times.push(t.format("%H:%M").to_string());
        }
    }
    times
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_slots_total() {
        assert_eq!(SLOT_COUNT, 10);
        assert_eq!(slot_times().len(), 10);
    }

    #[test]
    fn first_block_spacing() {
        let times = slot_times();
        assert_eq!(
            &times[..5],
            &["19:05", "19:16", "19:27", "19:38", "19:49"]
        );
    }

    #[test]
    fn second_block_spacing() {
        let times = slot_times();
        assert_eq!(
            &times[5..],
            &["20:05", "20:16", "20:27", "20:38", "20:49"]
        );
    }

    #[test]
    fn agenda_covers_the_evening() {
        assert_eq!(AGENDA.len(), 6);
        assert!(AGENDA[0].time.starts_with("19:00"));
        assert!(AGENDA[5].time.ends_with("21:30"));
    }
}
