//! Memory game state machine.
//!
//! The whole game lives in [`GameState`]: the shuffled deck, the
//! current [`GamePhase`], and the move counter. Mutations happen
//! through exactly two entry points, [`GameState::flip`] and
//! [`GameState::resolve_pending`], and phases only ever advance
//! `Idle -> OneFlipped -> Resolving -> (Idle | Completed)` within a
//! pair. Scheduling of the delayed resolution belongs to the owner
//! of the state (see [`crate::session`]); the machine itself is
//! synchronous and deterministic.

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::entities::{CardId, Deck, InvalidConfiguration, Symbol};

/// Phase of the two-card turn currently in progress.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum GamePhase {
    /// No card is face-up pending a decision.
    Idle,
    /// Exactly one unmatched card is face-up, awaiting a second flip.
    OneFlipped { pending: CardId },
    /// Two cards are face-up awaiting the delayed match check; no
    /// further flips are accepted.
    Resolving { pending: (CardId, CardId) },
    /// Every card is matched. Only a new game leaves this phase.
    Completed,
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Idle => "idle",
            Self::OneFlipped { .. } => "one flipped",
            Self::Resolving { .. } => "resolving",
            Self::Completed => "completed",
        };
        write!(f, "{repr}")
    }
}

/// What a call to [`GameState::flip`] did.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FlipOutcome {
    /// The flip was ignored: unknown id, matched card, wrong phase,
    /// or the same card flipped twice. Never an error; double-clicks
    /// are expected input.
    Ignored,
    /// The first card of a pair is now face-up.
    FirstFlipped,
    /// The second card is face-up. The caller must now arm the
    /// one-shot resolve delay that will invoke
    /// [`GameState::resolve_pending`].
    PairFlipped,
}

/// Per-card slice of a [`GameView`]. Face-down symbols are withheld
/// so the rendering side can't peek.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CardView {
    pub id: CardId,
    /// The card's symbol, present only while the card is face-up.
    pub symbol: Option<Symbol>,
    pub matched: bool,
    pub face_up: bool,
}

/// Read-only snapshot handed to the presentation boundary. Cards
/// appear in shuffled presentation order.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct GameView {
    pub phase: GamePhase,
    pub cards: Vec<CardView>,
    pub moves: u32,
}

/// A memory-matching game: deck, phase, and move counter.
#[derive(Clone, Debug)]
pub struct GameState {
    deck: Deck,
    phase: GamePhase,
    moves: u32,
}

impl GameState {
    /// Start a game with a freshly generated deck.
    pub fn new(symbols: &[Symbol]) -> Result<Self, InvalidConfiguration> {
        Ok(Self {
            deck: Deck::generate(symbols)?,
            phase: GamePhase::Idle,
            moves: 0,
        })
    }

    /// Replace the deck wholesale and return to `Idle` with zero
    /// moves, regardless of the prior phase. The owner is
    /// responsible for cancelling any armed resolve delay before the
    /// old deck is discarded.
    pub fn reset(&mut self, symbols: &[Symbol]) -> Result<(), InvalidConfiguration> {
        self.deck = Deck::generate(symbols)?;
        self.phase = GamePhase::Idle;
        self.moves = 0;
        debug!("game reset with {} cards", self.deck.len());
        Ok(())
    }

    /// Attempt to flip `card_id` face-up. Invalid targets are silent
    /// no-ops per the guard table; see [`FlipOutcome`].
    pub fn flip(&mut self, card_id: CardId) -> FlipOutcome {
        let Some(card) = self.deck.get(card_id) else {
            return FlipOutcome::Ignored;
        };
        if card.matched {
            return FlipOutcome::Ignored;
        }
        match self.phase {
            GamePhase::Resolving { .. } | GamePhase::Completed => FlipOutcome::Ignored,
            GamePhase::OneFlipped { pending } if pending == card_id => FlipOutcome::Ignored,
            GamePhase::Idle => {
                self.phase = GamePhase::OneFlipped { pending: card_id };
                debug!("first card {card_id} flipped");
                FlipOutcome::FirstFlipped
            }
            GamePhase::OneFlipped { pending } => {
                self.phase = GamePhase::Resolving {
                    pending: (pending, card_id),
                };
                debug!("second card {card_id} flipped, awaiting resolution");
                FlipOutcome::PairFlipped
            }
        }
    }

    /// Run the deferred match check for the pending pair. This is
    /// the only path that increments the move counter. Intended to
    /// be called once per `Resolving` entry, by the resolve timer.
    ///
    /// Returns whether the pair matched.
    ///
    /// # Panics
    ///
    /// Panics when the phase is not `Resolving`. The timer-arming
    /// discipline makes that unreachable; hitting it means the timer
    /// lifecycle is buggy, not that the player did something wrong.
    pub fn resolve_pending(&mut self) -> bool {
        let GamePhase::Resolving { pending: (a, b) } = self.phase else {
            panic!("resolve_pending called in {} phase", self.phase);
        };
        let (Some(first), Some(second)) = (self.deck.get(a), self.deck.get(b)) else {
            panic!("pending cards missing from deck");
        };

        let matched = first.symbol == second.symbol;
        if matched {
            for id in [a, b] {
                if let Some(card) = self.deck.get_mut(id) {
                    card.matched = true;
                }
            }
        }
        self.moves += 1;
        self.phase = if self.deck.all_matched() {
            GamePhase::Completed
        } else {
            GamePhase::Idle
        };
        debug!(
            "pair resolved (matched: {matched}), move {} -> {} phase",
            self.moves, self.phase
        );
        matched
    }

    /// Whether `card_id` should be rendered face-up: it is matched,
    /// or it is pending in the current turn. Pure query.
    #[must_use]
    pub fn is_face_up(&self, card_id: CardId) -> bool {
        let Some(card) = self.deck.get(card_id) else {
            return false;
        };
        if card.matched {
            return true;
        }
        match self.phase {
            GamePhase::OneFlipped { pending } => pending == card_id,
            GamePhase::Resolving { pending: (a, b) } => a == card_id || b == card_id,
            GamePhase::Idle | GamePhase::Completed => false,
        }
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Snapshot for the presentation boundary.
    #[must_use]
    pub fn view(&self) -> GameView {
        let cards = self
            .deck
            .iter()
            .map(|card| {
                let face_up = self.is_face_up(card.id);
                CardView {
                    id: card.id,
                    symbol: face_up.then_some(card.symbol),
                    matched: card.matched,
                    face_up,
                }
            })
            .collect();
        GameView {
            phase: self.phase,
            cards,
            moves: self.moves,
        }
    }
}
