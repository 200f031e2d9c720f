//! Game-wide constants.

use std::time::Duration;

use super::entities::Symbol;

/// Number of cards dealt per symbol. Matching is always pairwise,
/// so decks are generated with two copies of each symbol unless a
/// caller explicitly asks for more.
pub const PAIR_SIZE: usize = 2;

/// Default symbol alphabet (8 symbols, 16 cards).
pub const DEFAULT_SYMBOLS: [Symbol; 8] = ['🍎', '🍓', '📌', '🧰', '🧨', '👺', '🎈', '🚨'];

/// How long a flipped pair stays face-up before the match check runs.
/// A presentation parameter, not a correctness one; must be nonzero.
pub const DEFAULT_RESOLVE_DELAY: Duration = Duration::from_millis(800);
