//! Game-state engine for a terminal falling-block puzzle.
//!
//! The engine is pure and single-owner: it never touches the terminal, the
//! clock or the keyboard itself. The front-end feeds it [`GameAction`]s and
//! timestamps, and reads back the renderable state.
//!
//! - [`core`] - board, shape catalog, active piece, placement and rotation rules
//! - [`engine`] - piece generation, scoring, fall timing and the session state machine

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("piece colliding with the board or its boundaries")]
pub struct PieceCollisionError;
