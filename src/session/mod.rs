//! Session module running one memory game behind an async actor.
//!
//! This module implements:
//! - SessionActor: async actor owning the game state and the single
//!   outstanding resolve timer
//! - SessionHandle: message-based handle exposing `flip`, `new_game`,
//!   `view`, and `close`, plus a watch channel of state snapshots
//! - Session configuration and lifecycle management
//!
//! ## Architecture
//!
//! Each session runs in its own Tokio task with an mpsc message
//! inbox. State mutations happen only inside the actor's event loop,
//! one event at a time, so the reveal-then-resolve delay is the only
//! asynchronous suspension point and no locking is needed.
//!
//! ## Example
//!
//! ```
//! use memory_pairs::session::{SessionActor, SessionConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, handle) = SessionActor::new(SessionConfig::default()).unwrap();
//!     tokio::spawn(actor.run());
//!
//!     let view = handle.view().await.unwrap();
//!     assert_eq!(view.moves, 0);
//! }
//! ```

pub mod actor;
pub mod config;
pub mod messages;

pub use actor::{SessionActor, SessionHandle, SessionId};
pub use config::SessionConfig;
pub use messages::{SessionError, SessionMessage};
