//! Game engine logic and state management.
//!
//! This module composes the [`core`](crate::core) data structures into a
//! playable game:
//!
//! - [`GameSession`] - the session state machine and the per-tick update contract
//! - [`GameStats`] - score, level and line counters
//! - [`FallClock`] - decides when the active piece falls on its own
//! - [`PieceGenerator`] - seeded uniform piece draws
//! - [`PieceSeed`] - seed for deterministic piece generation
//!
//! # Game Flow
//!
//! 1. Create a [`GameSession`], which spawns the first piece
//! 2. Feed player input through [`GameSession::apply_action`]
//! 3. Call [`GameSession::update`] every frame with the current time
//! 4. When a piece cannot fall further it locks, full rows clear and the next piece spawns
//! 5. Repeat until the spawn is blocked or the player quits
//!
//! # Example
//!
//! ```
//! use std::time::Instant;
//!
//! use termtris_engine::{GameAction, GameSession};
//!
//! let mut session = GameSession::new();
//!
//! session.apply_action(GameAction::MoveLeft);
//! session.apply_action(GameAction::Rotate);
//! session.apply_action(GameAction::HardDrop);
//! session.update(Instant::now());
//!
//! assert_eq!(session.stats().completed_pieces(), 1);
//! ```

pub use self::{fall_clock::*, game_session::*, game_stats::*, piece_generator::*};

mod fall_clock;
mod game_session;
mod game_stats;
mod piece_generator;
