/// Property-based tests for deck generation using proptest
///
/// These tests verify the deck invariants across a wide range of
/// symbol alphabets: size, pairing, id uniqueness, and shuffle
/// independence.
use memory_pairs::game::{CardId, Deck, InvalidConfiguration, Symbol};
use proptest::prelude::*;
use std::collections::{BTreeSet, HashMap, HashSet};

// Strategy to generate a set of distinct symbols (1 to 16 of them)
fn symbol_set_strategy() -> impl Strategy<Value = Vec<Symbol>> {
    prop::collection::btree_set(any::<char>(), 1..=16)
        .prop_map(|set: BTreeSet<char>| set.into_iter().collect())
}

fn symbol_counts(deck: &Deck) -> HashMap<Symbol, usize> {
    let mut counts = HashMap::new();
    for card in deck.iter() {
        *counts.entry(card.symbol).or_insert(0) += 1;
    }
    counts
}

proptest! {
    #[test]
    fn test_deck_has_exactly_two_cards_per_symbol(symbols in symbol_set_strategy()) {
        let deck = Deck::generate(&symbols).unwrap();

        prop_assert_eq!(deck.len(), 2 * symbols.len());
        let counts = symbol_counts(&deck);
        prop_assert_eq!(counts.len(), symbols.len());
        for symbol in &symbols {
            prop_assert_eq!(counts.get(symbol), Some(&2));
        }
    }

    #[test]
    fn test_deck_ids_are_unique_and_resolvable(symbols in symbol_set_strategy()) {
        let deck = Deck::generate(&symbols).unwrap();

        let ids: HashSet<CardId> = deck.iter().map(|card| card.id).collect();
        prop_assert_eq!(ids.len(), deck.len());
        for card in deck.iter() {
            prop_assert_eq!(deck.get(card.id), Some(card));
        }
    }

    #[test]
    fn test_all_cards_start_unmatched(symbols in symbol_set_strategy()) {
        let deck = Deck::generate(&symbols).unwrap();
        prop_assert!(deck.iter().all(|card| !card.matched));
    }

    #[test]
    fn test_repeated_generation_shuffles_independently(symbols in symbol_set_strategy()) {
        // Same input, two calls: same symbol multiset, fresh ids.
        let first = Deck::generate(&symbols).unwrap();
        let second = Deck::generate(&symbols).unwrap();

        prop_assert_eq!(symbol_counts(&first), symbol_counts(&second));
        let first_ids: HashSet<CardId> = first.iter().map(|card| card.id).collect();
        prop_assert!(second.iter().all(|card| !first_ids.contains(&card.id)));
    }

    #[test]
    fn test_duplicate_symbols_are_rejected(
        symbols in symbol_set_strategy(),
        dup_idx in any::<prop::sample::Index>(),
    ) {
        let mut with_dup = symbols.clone();
        with_dup.push(symbols[dup_idx.index(symbols.len())]);

        let result = Deck::generate(&with_dup);
        prop_assert!(matches!(
            result,
            Err(InvalidConfiguration::DuplicateSymbol(_))
        ));
    }

    #[test]
    fn test_copies_below_pair_size_are_rejected(
        symbols in symbol_set_strategy(),
        copies in 0usize..2,
    ) {
        prop_assert_eq!(
            Deck::generate_with_copies(&symbols, copies).unwrap_err(),
            InvalidConfiguration::TooFewCopies(copies)
        );
    }
}
