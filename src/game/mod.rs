//! Memory game engine - deck, entities, and state machine.
//!
//! This module provides the foundational game implementation:
//! - Paired-card deck generation with uniform shuffling
//! - The four-phase flip/resolve state machine
//! - Read-only views for the presentation boundary

pub mod constants;
pub mod entities;
pub mod state_machine;

pub use entities::{Card, CardId, Deck, InvalidConfiguration, Symbol};
pub use state_machine::{CardView, FlipOutcome, GamePhase, GameState, GameView};
