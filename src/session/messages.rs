//! Session actor message types.

use thiserror::Error;
use tokio::sync::oneshot;

use crate::game::{CardId, GameView, InvalidConfiguration, Symbol};

/// Failure reported through a session handle.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SessionError {
    #[error("session is closed")]
    Closed,
    #[error(transparent)]
    InvalidConfiguration(#[from] InvalidConfiguration),
}

/// Messages that can be sent to a [`crate::session::SessionActor`]
#[derive(Debug)]
pub enum SessionMessage {
    /// Flip a card face-up. Invalid targets are no-ops, so the
    /// response is the (possibly unchanged) view, never an error.
    Flip {
        card_id: CardId,
        response: oneshot::Sender<GameView>,
    },

    /// Discard the current game and start a fresh one. `None` reuses
    /// the session's configured symbol alphabet.
    NewGame {
        symbols: Option<Vec<Symbol>>,
        response: oneshot::Sender<Result<GameView, InvalidConfiguration>>,
    },

    /// Get the current read-only snapshot
    GetView { response: oneshot::Sender<GameView> },

    /// Shut the session down
    Close,
}
