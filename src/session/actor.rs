//! Session actor implementation with async message handling.
//!
//! The actor owns the only two pieces of mutable state in the
//! system: the [`GameState`] and the single outstanding resolve
//! timer. Every mutation runs to completion inside the actor's event
//! loop, so no locking is needed anywhere.

use std::{future, pin::Pin};

use tokio::{
    sync::{mpsc, oneshot, watch},
    time::{self, Sleep},
};
use uuid::Uuid;

use super::{
    config::SessionConfig,
    messages::{SessionError, SessionMessage},
};
use crate::game::{CardId, FlipOutcome, GameState, GameView, InvalidConfiguration, Symbol};

/// Identifier for a running session.
pub type SessionId = Uuid;

/// Session handle for sending messages and observing state
#[derive(Clone)]
pub struct SessionHandle {
    sender: mpsc::Sender<SessionMessage>,
    session_id: SessionId,
    views: watch::Receiver<GameView>,
}

impl SessionHandle {
    #[must_use]
    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    /// Watch channel carrying the latest [`GameView`]. The value is
    /// replaced only when the state actually changes, so renderers
    /// can await `changed()` without seeing no-op wakeups.
    #[must_use]
    pub fn views(&self) -> watch::Receiver<GameView> {
        self.views.clone()
    }

    /// Flip a card face-up. Invalid targets are silent no-ops; the
    /// returned view reflects whatever the flip did (or didn't do).
    pub async fn flip(&self, card_id: CardId) -> Result<GameView, SessionError> {
        let (response, rx) = oneshot::channel();
        self.send(SessionMessage::Flip { card_id, response }).await?;
        rx.await.map_err(|_| SessionError::Closed)
    }

    /// Discard the current game and start a fresh one. `None` reuses
    /// the session's configured symbol alphabet. Cancels any pending
    /// resolution.
    pub async fn new_game(&self, symbols: Option<Vec<Symbol>>) -> Result<GameView, SessionError> {
        let (response, rx) = oneshot::channel();
        self.send(SessionMessage::NewGame { symbols, response })
            .await?;
        let result = rx.await.map_err(|_| SessionError::Closed)?;
        Ok(result?)
    }

    /// Current read-only snapshot.
    pub async fn view(&self) -> Result<GameView, SessionError> {
        let (response, rx) = oneshot::channel();
        self.send(SessionMessage::GetView { response }).await?;
        rx.await.map_err(|_| SessionError::Closed)
    }

    /// Shut the session down. Outstanding timers die with it.
    pub async fn close(&self) -> Result<(), SessionError> {
        self.send(SessionMessage::Close).await
    }

    async fn send(&self, message: SessionMessage) -> Result<(), SessionError> {
        self.sender
            .send(message)
            .await
            .map_err(|_| SessionError::Closed)
    }
}

/// Actor owning one memory game and its resolve timer
pub struct SessionActor {
    id: SessionId,
    config: SessionConfig,
    state: GameState,
    /// Message inbox
    inbox: mpsc::Receiver<SessionMessage>,
    /// The single outstanding reveal-then-resolve timer. `Some`
    /// exactly while the game is in the `Resolving` phase; cleared
    /// on firing and on new-game.
    resolve_timer: Option<Pin<Box<Sleep>>>,
    /// Snapshot publisher for the presentation boundary
    views: watch::Sender<GameView>,
    is_closed: bool,
}

impl SessionActor {
    /// Create a new session actor and its handle. Validates the
    /// configuration and deals the first deck.
    pub fn new(config: SessionConfig) -> Result<(Self, SessionHandle), InvalidConfiguration> {
        config.validate()?;
        let state = GameState::new(&config.symbols)?;

        let (sender, inbox) = mpsc::channel(config.mailbox_capacity);
        let (views_tx, views_rx) = watch::channel(state.view());
        let id = Uuid::new_v4();

        let actor = Self {
            id,
            config,
            state,
            inbox,
            resolve_timer: None,
            views: views_tx,
            is_closed: false,
        };
        let handle = SessionHandle {
            sender,
            session_id: id,
            views: views_rx,
        };
        Ok((actor, handle))
    }

    /// Run the session event loop until closed or all handles drop.
    pub async fn run(mut self) {
        log::info!(
            "session {} starting with {} cards",
            self.id,
            self.state.deck().len()
        );

        loop {
            tokio::select! {
                message = self.inbox.recv() => {
                    let Some(message) = message else { break };
                    self.handle_message(message);
                    if self.is_closed {
                        break;
                    }
                }

                // The delayed match check. Guarded so an unarmed
                // timer is never polled.
                () = armed(&mut self.resolve_timer), if self.resolve_timer.is_some() => {
                    self.resolve_timer = None;
                    self.state.resolve_pending();
                    self.publish();
                }
            }
        }

        log::info!("session {} closed", self.id);
    }

    fn handle_message(&mut self, message: SessionMessage) {
        match message {
            SessionMessage::Flip { card_id, response } => {
                if self.state.flip(card_id) == FlipOutcome::PairFlipped {
                    // Resolving blocks further flips, so no timer can
                    // already be armed here.
                    debug_assert!(self.resolve_timer.is_none());
                    self.resolve_timer =
                        Some(Box::pin(time::sleep(self.config.resolve_delay)));
                }
                self.publish();
                let _ = response.send(self.state.view());
            }

            SessionMessage::NewGame { symbols, response } => {
                let symbols = symbols.unwrap_or_else(|| self.config.symbols.clone());
                let result = self.state.reset(&symbols).map(|()| {
                    // The stale timer must never fire against the
                    // fresh deck.
                    self.resolve_timer = None;
                    self.publish();
                    self.state.view()
                });
                let _ = response.send(result);
            }

            SessionMessage::GetView { response } => {
                let _ = response.send(self.state.view());
            }

            SessionMessage::Close => {
                self.is_closed = true;
            }
        }
    }

    /// Publish the current view, waking watchers only when it
    /// actually differs from the last published one.
    fn publish(&self) {
        let view = self.state.view();
        self.views.send_if_modified(|current| {
            if *current == view {
                false
            } else {
                *current = view;
                true
            }
        });
    }
}

/// Resolves when the armed timer fires; pends forever when no timer
/// is armed (the select guard keeps that branch disabled anyway).
async fn armed(timer: &mut Option<Pin<Box<Sleep>>>) {
    match timer.as_mut() {
        Some(sleep) => sleep.as_mut().await,
        None => future::pending().await,
    }
}
