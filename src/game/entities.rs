use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt};
use thiserror::Error;
use uuid::Uuid;

use super::constants::PAIR_SIZE;

/// Type alias for card faces. Each symbol appears on exactly two
/// cards in a standard deck.
pub type Symbol = char;

/// Stable identifier for a single card, assigned at deck-creation
/// time and never reused within a game.
pub type CardId = Uuid;

/// Rejected deck or session configuration.
#[derive(Clone, Debug, Deserialize, Eq, Error, PartialEq, Serialize)]
pub enum InvalidConfiguration {
    #[error("symbol set must contain at least one symbol")]
    EmptySymbolSet,
    #[error("symbol {0} appears more than once in the symbol set")]
    DuplicateSymbol(Symbol),
    #[error("need >= 2 copies of each symbol, got {0}")]
    TooFewCopies(usize),
    #[error("resolve delay must be nonzero")]
    ZeroResolveDelay,
}

/// A single card: a symbol plus the flag recording whether its pair
/// has been found. `matched` starts false and is set true exactly
/// once, by the state machine's resolution step.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Card {
    pub id: CardId,
    pub symbol: Symbol,
    pub matched: bool,
}

impl Card {
    fn new(symbol: Symbol) -> Self {
        Self {
            id: Uuid::new_v4(),
            symbol,
            matched: false,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = if self.matched {
            format!("[{}]", self.symbol)
        } else {
            format!("({})", self.symbol)
        };
        write!(f, "{repr}")
    }
}

/// A shuffled deck of paired cards. Iteration order is the shuffled
/// presentation order and stays stable for the lifetime of one game;
/// the deck is replaced wholesale on reset rather than reshuffled in
/// place.
#[derive(Clone, Debug)]
pub struct Deck {
    cards: Vec<Card>,
    /// Card id -> index into `cards`.
    by_id: HashMap<CardId, usize>,
}

impl Deck {
    /// Generate a deck with [`PAIR_SIZE`] copies of each symbol in a
    /// uniformly random order.
    pub fn generate(symbols: &[Symbol]) -> Result<Self, InvalidConfiguration> {
        Self::generate_with_copies(symbols, PAIR_SIZE)
    }

    /// Generate a deck with `copies` cards per symbol. Every
    /// permutation of the resulting cards is equally likely. The
    /// input is validated, never mutated; repeated calls with the
    /// same symbols produce independent shuffles.
    pub fn generate_with_copies(
        symbols: &[Symbol],
        copies: usize,
    ) -> Result<Self, InvalidConfiguration> {
        if symbols.is_empty() {
            return Err(InvalidConfiguration::EmptySymbolSet);
        }
        if copies < PAIR_SIZE {
            return Err(InvalidConfiguration::TooFewCopies(copies));
        }
        let mut seen = Vec::with_capacity(symbols.len());
        for &symbol in symbols {
            if seen.contains(&symbol) {
                return Err(InvalidConfiguration::DuplicateSymbol(symbol));
            }
            seen.push(symbol);
        }

        let mut cards = Vec::with_capacity(symbols.len() * copies);
        for &symbol in symbols {
            for _ in 0..copies {
                cards.push(Card::new(symbol));
            }
        }
        cards.shuffle(&mut rand::rng());

        let by_id = cards.iter().enumerate().map(|(i, c)| (c.id, i)).collect();
        Ok(Self { cards, by_id })
    }

    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.by_id.get(&id).map(|&i| &self.cards[i])
    }

    pub(super) fn get_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.by_id.get(&id).map(|&i| &mut self.cards[i])
    }

    /// Cards in shuffled presentation order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn all_matched(&self) -> bool {
        self.cards.iter().all(|card| card.matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::constants::DEFAULT_SYMBOLS;
    use std::collections::HashSet;

    #[test]
    fn generated_deck_has_two_cards_per_symbol() {
        let deck = Deck::generate(&DEFAULT_SYMBOLS).unwrap();

        assert_eq!(deck.len(), 2 * DEFAULT_SYMBOLS.len());
        for symbol in DEFAULT_SYMBOLS {
            let count = deck.iter().filter(|card| card.symbol == symbol).count();
            assert_eq!(count, 2, "symbol {symbol} should appear exactly twice");
        }
    }

    #[test]
    fn generated_deck_has_unique_ids() {
        let deck = Deck::generate(&DEFAULT_SYMBOLS).unwrap();
        let ids: HashSet<CardId> = deck.iter().map(|card| card.id).collect();

        assert_eq!(ids.len(), deck.len());
    }

    #[test]
    fn generated_cards_start_unmatched() {
        let deck = Deck::generate(&DEFAULT_SYMBOLS).unwrap();

        assert!(deck.iter().all(|card| !card.matched));
        assert!(!deck.all_matched());
    }

    #[test]
    fn lookup_by_id_returns_the_same_card() {
        let deck = Deck::generate(&['a', 'b']).unwrap();
        for card in deck.iter() {
            assert_eq!(deck.get(card.id), Some(card));
        }
        assert_eq!(deck.get(Uuid::new_v4()), None);
    }

    #[test]
    fn empty_symbol_set_is_rejected() {
        assert_eq!(
            Deck::generate(&[]).unwrap_err(),
            InvalidConfiguration::EmptySymbolSet
        );
    }

    #[test]
    fn duplicate_symbols_are_rejected() {
        assert_eq!(
            Deck::generate(&['a', 'b', 'a']).unwrap_err(),
            InvalidConfiguration::DuplicateSymbol('a')
        );
    }

    #[test]
    fn single_copies_are_rejected() {
        assert_eq!(
            Deck::generate_with_copies(&['a', 'b'], 1).unwrap_err(),
            InvalidConfiguration::TooFewCopies(1)
        );
    }

    #[test]
    fn extra_copies_are_honored() {
        let deck = Deck::generate_with_copies(&['a', 'b'], 3).unwrap();

        assert_eq!(deck.len(), 6);
        for symbol in ['a', 'b'] {
            assert_eq!(deck.iter().filter(|c| c.symbol == symbol).count(), 3);
        }
    }
}
