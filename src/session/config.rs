//! Session configuration models.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::game::{
    InvalidConfiguration, Symbol,
    constants::{DEFAULT_RESOLVE_DELAY, DEFAULT_SYMBOLS},
};

/// Session configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Symbol alphabet; the deck carries two cards per entry.
    pub symbols: Vec<Symbol>,

    /// How long a flipped pair stays revealed before the match check.
    pub resolve_delay: Duration,

    /// Capacity of the actor's message inbox.
    pub mailbox_capacity: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_SYMBOLS.to_vec(),
            resolve_delay: DEFAULT_RESOLVE_DELAY,
            mailbox_capacity: 64,
        }
    }
}

impl SessionConfig {
    /// Validate configuration. Symbol-set problems surface again at
    /// deck generation; the delay is only checked here.
    pub fn validate(&self) -> Result<(), InvalidConfiguration> {
        if self.symbols.is_empty() {
            return Err(InvalidConfiguration::EmptySymbolSet);
        }
        for (i, &symbol) in self.symbols.iter().enumerate() {
            if self.symbols[..i].contains(&symbol) {
                return Err(InvalidConfiguration::DuplicateSymbol(symbol));
            }
        }
        if self.resolve_delay.is_zero() {
            return Err(InvalidConfiguration::ZeroResolveDelay);
        }
        Ok(())
    }
}
