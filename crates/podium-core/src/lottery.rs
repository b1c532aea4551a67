//! The duty lottery: randomized role assignment with a paced reveal.
//!
//! A draw pairs a shuffled snapshot of the roster with a shuffled deck of
//! role seats, then reveals the pairings one at a time on a fixed cadence.
//! The engine moves `Idle -> Drawing -> Completed`; invalidation from any
//! state returns to `Idle` and clears all winners. The assignment is fixed
//! the moment a draw starts; [`Lottery::tick`] only controls visibility.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::sheet::Student;

/// Delay before the reveal sequence begins.
pub const SUSPENSE_DELAY: Duration = Duration::from_millis(500);

/// Spacing between reveals, including before the first one.
pub const REVEAL_INTERVAL: Duration = Duration::from_millis(600);

/// Total number of duty seats across all roles.
pub const SEAT_TOTAL: usize = 6;

/// A duty role drawn in the lottery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Records the presentations on video.
    Videographer,
    /// Takes the written minutes.
    NoteTaker,
    /// Tidies the room afterwards.
    CleaningDuty,
}

impl Role {
    /// All roles in display order.
    pub const ALL: [Role; 3] = [Role::Videographer, Role::NoteTaker, Role::CleaningDuty];

    /// Fixed number of seats for this role.
    pub fn headcount(self) -> usize {
        match self {
            Role::Videographer => 1,
            Role::NoteTaker => 3,
            Role::CleaningDuty => 2,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Videographer => write!(f, "Videographer"),
            Role::NoteTaker => write!(f, "Note Taker"),
            Role::CleaningDuty => write!(f, "Cleaning Duty"),
        }
    }
}

/// Build the seat deck: one token per seat, in display order.
pub fn role_deck() -> Vec<Role> {
    Role::ALL
        .iter()
        .flat_map(|r| std::iter::repeat(*r).take(r.headcount()))
        .collect()
}

/// One drawn pairing of a role seat and a student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Winner {
    /// The duty role.
    pub role: Role,
    /// The student assigned to it.
    pub student: Student,
}

/// Lifecycle of a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawState {
    /// No draw yet, or the last result was invalidated.
    Idle,
    /// A draw is running; winners appear one at a time.
    Drawing,
    /// Every pairing is revealed. Terminal until invalidated.
    Completed,
}

/// The lottery engine. Owns only the winners collection and draw
/// progress; the roster is a read-only snapshot taken at draw start.
#[derive(Debug)]
pub struct Lottery {
    state: DrawState,
    revealed: Vec<Winner>,
    pending: VecDeque<Winner>,
    next_reveal_at: Option<Instant>,
}

impl Default for Lottery {
    fn default() -> Self {
        Self::new()
    }
}

impl Lottery {
    /// Create an idle lottery with no winners.
    pub fn new() -> Self {
        Self {
            state: DrawState::Idle,
            revealed: Vec::new(),
            pending: VecDeque::new(),
            next_reveal_at: None,
        }
    }

    /// Current draw state.
    pub fn state(&self) -> DrawState {
        self.state
    }

    /// Winners revealed so far, in reveal order.
    pub fn winners(&self) -> &[Winner] {
        &self.revealed
    }

    /// Start a draw over a snapshot of `roster`.
    ///
    /// Guard no-op (returns `false`) when the roster is empty or a result
    /// already exists. Three independent uniform shuffles decide the
    /// outcome: the seat deck, the roster snapshot, and finally the reveal
    /// order of the pairing list. Pairing is element-wise, so a roster
    /// smaller than [`SEAT_TOTAL`] leaves seats unfilled and a larger one
    /// leaves students without a duty.
    pub fn start(&mut self, roster: &[Student], rng: &mut StdRng, now: Instant) -> bool {
        if roster.is_empty() || self.state != DrawState::Idle {
            return false;
        }

        let mut deck = role_deck();
        deck.shuffle(rng);

        let mut students: Vec<Student> = roster.to_vec();
        students.shuffle(rng);

        let mut pairings: Vec<Winner> = deck
            .into_iter()
            .zip(students)
            .map(|(role, student)| Winner { role, student })
            .collect();
        pairings.shuffle(rng);

        self.revealed.clear();
        self.pending = pairings.into();
        self.state = DrawState::Drawing;
        self.next_reveal_at = Some(now + SUSPENSE_DELAY + REVEAL_INTERVAL);
        true
    }

    /// Advance the reveal to `now`.
    ///
    /// Moves every pairing whose deadline has passed into the visible
    /// winners list, then transitions to `Completed` once the queue is
    /// empty. Returns whether anything became visible.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        while self.state == DrawState::Drawing {
            let Some(due) = self.next_reveal_at else {
                break;
            };
            if now < due {
                break;
            }
            if let Some(winner) = self.pending.pop_front() {
                self.revealed.push(winner);
                changed = true;
            }
            if self.pending.is_empty() {
                self.state = DrawState::Completed;
                self.next_reveal_at = None;
            } else {
                self.next_reveal_at = Some(due + REVEAL_INTERVAL);
            }
        }
        changed
    }

    /// Invalidate any result and return to `Idle` with no winners.
    pub fn reset(&mut self) {
        self.state = DrawState::Idle;
        self.revealed.clear();
        self.pending.clear();
        self.next_reveal_at = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn roster(n: u32) -> Vec<Student> {
        (1..=n)
            .map(|id| Student {
                id,
                name: format!("Student {id}"),
            })
            .collect()
    }

    /// Run a full draw to completion and return the winners.
    fn complete_draw(students: &[Student], seed: u64) -> Vec<Winner> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut lottery = Lottery::new();
        let t0 = Instant::now();
        assert!(lottery.start(students, &mut rng, t0));
        lottery.tick(t0 + Duration::from_secs(60));
        assert_eq!(lottery.state(), DrawState::Completed);
        lottery.winners().to_vec()
    }

    #[test]
    fn deck_matches_headcounts() {
        let deck = role_deck();
        assert_eq!(deck.len(), SEAT_TOTAL);
        for role in Role::ALL {
            let count = deck.iter().filter(|r| **r == role).count();
            assert_eq!(count, role.headcount());
        }
    }

    #[test]
    fn headcount_total_is_seat_total() {
        let total: usize = Role::ALL.iter().map(|r| r.headcount()).sum();
        assert_eq!(total, SEAT_TOTAL);
    }

    #[test]
    fn role_display_names() {
        assert_eq!(Role::Videographer.to_string(), "Videographer");
        assert_eq!(Role::NoteTaker.to_string(), "Note Taker");
        assert_eq!(Role::CleaningDuty.to_string(), "Cleaning Duty");
    }

    #[test]
    fn empty_roster_is_noop() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut lottery = Lottery::new();
        assert!(!lottery.start(&[], &mut rng, Instant::now()));
        assert_eq!(lottery.state(), DrawState::Idle);
        assert!(lottery.winners().is_empty());
    }

    #[test]
    fn small_roster_all_assigned() {
        for n in 1..=6 {
            let students = roster(n);
            let winners = complete_draw(&students, u64::from(n));
            assert_eq!(winners.len(), n as usize);
        }
    }

    #[test]
    fn large_roster_fills_every_seat() {
        let students = roster(10);
        let winners = complete_draw(&students, 7);
        assert_eq!(winners.len(), SEAT_TOTAL);
        let mut per_role: HashMap<Role, usize> = HashMap::new();
        for w in &winners {
            *per_role.entry(w.role).or_insert(0) += 1;
        }
        for role in Role::ALL {
            assert_eq!(per_role.get(&role).copied().unwrap_or(0), role.headcount());
        }
    }

    #[test]
    fn no_student_drawn_twice() {
        for seed in 0..20 {
            let students = roster(8);
            let winners = complete_draw(&students, seed);
            let mut ids: Vec<u32> = winners.iter().map(|w| w.student.id).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), winners.len());
        }
    }

    #[test]
    fn role_caps_never_exceeded() {
        for seed in 0..20 {
            for n in 1..=9 {
                let students = roster(n);
                let winners = complete_draw(&students, seed);
                for role in Role::ALL {
                    let count = winners.iter().filter(|w| w.role == role).count();
                    assert!(count <= role.headcount());
                }
            }
        }
    }

    #[test]
    fn same_seed_same_outcome() {
        let students = roster(5);
        assert_eq!(complete_draw(&students, 42), complete_draw(&students, 42));
    }

    #[test]
    fn nothing_revealed_before_first_deadline() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut lottery = Lottery::new();
        let t0 = Instant::now();
        lottery.start(&roster(3), &mut rng, t0);

        assert!(!lottery.tick(t0));
        assert!(!lottery.tick(t0 + Duration::from_millis(1099)));
        assert!(lottery.winners().is_empty());
        assert_eq!(lottery.state(), DrawState::Drawing);
    }

    #[test]
    fn reveals_are_spaced_by_interval() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut lottery = Lottery::new();
        let t0 = Instant::now();
        lottery.start(&roster(3), &mut rng, t0);

        assert!(lottery.tick(t0 + Duration::from_millis(1100)));
        assert_eq!(lottery.winners().len(), 1);
        assert!(!lottery.tick(t0 + Duration::from_millis(1699)));
        assert!(lottery.tick(t0 + Duration::from_millis(1700)));
        assert_eq!(lottery.winners().len(), 2);
        assert!(lottery.tick(t0 + Duration::from_millis(2300)));
        assert_eq!(lottery.winners().len(), 3);
        assert_eq!(lottery.state(), DrawState::Completed);
    }

    #[test]
    fn late_tick_catches_up_in_one_call() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut lottery = Lottery::new();
        let t0 = Instant::now();
        lottery.start(&roster(4), &mut rng, t0);

        // A stalled frame still reveals everything that is due.
        assert!(lottery.tick(t0 + Duration::from_millis(2300)));
        assert_eq!(lottery.winners().len(), 3);
        assert_eq!(lottery.state(), DrawState::Drawing);
    }

    #[test]
    fn restart_while_drawing_is_noop() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut lottery = Lottery::new();
        let t0 = Instant::now();
        lottery.start(&roster(3), &mut rng, t0);
        lottery.tick(t0 + Duration::from_millis(1100));
        let seen = lottery.winners().to_vec();

        assert!(!lottery.start(&roster(3), &mut rng, t0));
        assert_eq!(lottery.state(), DrawState::Drawing);
        assert_eq!(lottery.winners(), seen.as_slice());
    }

    #[test]
    fn restart_after_completion_is_noop() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut lottery = Lottery::new();
        let t0 = Instant::now();
        lottery.start(&roster(3), &mut rng, t0);
        lottery.tick(t0 + Duration::from_secs(60));
        let winners = lottery.winners().to_vec();

        assert!(!lottery.start(&roster(3), &mut rng, t0));
        assert_eq!(lottery.state(), DrawState::Completed);
        assert_eq!(lottery.winners(), winners.as_slice());
    }

    #[test]
    fn reset_clears_everything() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut lottery = Lottery::new();
        let t0 = Instant::now();
        lottery.start(&roster(3), &mut rng, t0);
        lottery.tick(t0 + Duration::from_millis(1100));

        lottery.reset();
        assert_eq!(lottery.state(), DrawState::Idle);
        assert!(lottery.winners().is_empty());

        // A reset lottery accepts a new draw.
        assert!(lottery.start(&roster(2), &mut rng, t0));
    }

    #[test]
    fn tick_when_idle_or_completed_changes_nothing() {
        let mut lottery = Lottery::new();
        assert!(!lottery.tick(Instant::now()));

        let mut rng = StdRng::seed_from_u64(5);
        let t0 = Instant::now();
        lottery.start(&roster(2), &mut rng, t0);
        lottery.tick(t0 + Duration::from_secs(60));
        assert!(!lottery.tick(t0 + Duration::from_secs(120)));
        assert_eq!(lottery.winners().len(), 2);
    }
}
