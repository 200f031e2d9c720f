//! # Memory Pairs
//!
//! A memory-matching card game engine built around an explicit finite
//! state machine (FSM) and a single cancellable resolve timer.
//!
//! A deck of paired symbols is shuffled and presented face-down. The
//! player flips two cards per turn; matches stay face-up, mismatches
//! flip back after a short reveal delay, and the game completes when
//! every pair is found. Rendering is out of scope: the engine exposes
//! read-only [`game::GameView`] snapshots plus the two mutators
//! (`flip`, `new_game`), and nothing else.
//!
//! ## Architecture
//!
//! The game progresses through four phases:
//!
//! - **Idle**: no card is pending
//! - **OneFlipped**: one card is face-up awaiting its partner
//! - **Resolving**: two cards are revealed, the delayed match check
//!   is armed, and further flips are ignored
//! - **Completed**: every card is matched
//!
//! Phase data, the deck, and the move counter live in
//! [`game::GameState`]; the one-shot resolve timer is owned by the
//! [`session::SessionActor`] that wraps it, armed on entering
//! `Resolving` and cancelled on every other exit path.
//!
//! ## Core Modules
//!
//! - [`game`]: deck generation, entities, and the state machine
//! - [`session`]: async session actor, handle, and configuration
//!
//! ## Example
//!
//! ```
//! use memory_pairs::game::{GamePhase, GameState};
//!
//! let game = GameState::new(&['🍎', '🍓']).unwrap();
//! assert_eq!(game.phase(), GamePhase::Idle);
//! assert_eq!(game.deck().len(), 4);
//! ```

/// Core game logic, entities, and state machine.
pub mod game;
pub use game::{
    Card, CardId, Deck, FlipOutcome, GamePhase, GameState, GameView, InvalidConfiguration, Symbol,
    constants::{self, DEFAULT_RESOLVE_DELAY, DEFAULT_SYMBOLS, PAIR_SIZE},
};

/// Async session actor owning a game and its resolve timer.
pub mod session;
pub use session::{SessionActor, SessionConfig, SessionError, SessionHandle, SessionId};
