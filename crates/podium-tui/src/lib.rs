//! Terminal UI for Podium.
//!
//! Renders the agenda, sign-up sheet, duty draw, and live results in a
//! single ratatui screen, and forwards register/cancel/draw intents into
//! the core engine. All logic lives in `podium-core`; this crate only
//! observes state and translates key presses.

pub mod app;
pub mod terminal;
pub mod views;
