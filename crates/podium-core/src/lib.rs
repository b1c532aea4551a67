//! Core state engine for Podium: a single-session presentation sign-up
//! sheet with a randomized duty draw.
//!
//! This crate is presentation-free. A front end holds one
//! [`ClassSession`], forwards register/cancel/draw intents into it, pumps
//! [`ClassSession::tick`] while a draw is revealing, and renders the
//! observable state: slots, roster, winners, draw state, and the last
//! rejection message. All state is in-memory and lost on exit.

/// Error types used throughout the crate.
pub mod error;
/// The duty lottery engine and role definitions.
pub mod lottery;
/// Fixed agenda table and slot-time generation.
pub mod schedule;
/// The session façade owning all mutable state.
pub mod session;
/// Presentation slots and the student roster.
pub mod sheet;

/// Re-export error types.
pub use error::{SignupError, SignupResult};
/// Re-export lottery types.
pub use lottery::{DrawState, Lottery, Role, Winner};
/// Re-export the session façade.
pub use session::{ClassSession, SessionConfig};
/// Re-export sheet types.
pub use sheet::{SignupSheet, Slot, Student};
