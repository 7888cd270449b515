//! Algebraic-notation chess rules engine.
//!
//! This crate turns move notation into board mutations in three steps:
//! - [`parse_move`] reads a token like `Nxd5` or `O-O` into a [`Move`]
//! - [`GameState::resolve`] finds the unique piece that notation refers
//!   to, searching the board along each candidate's movement patterns
//! - [`GameState::apply_move`] commits the resolved move and flips the
//!   side to move
//!
//! Legality is not decidable from notation alone: the resolver walks the
//! board geometry, respecting blockers, side ownership, and the special
//! cases (castling, en passant, pawn double-step, capture rules).
//!
//! # Example
//!
//! ```
//! use sanchess_engine::GameState;
//!
//! let mut state = GameState::new();
//! state.apply_moves(["e4", "e5", "Nf3", "Nc6"]).unwrap();
//! println!("{}", state.board());
//! ```

mod board;
mod game;
mod mov;
mod parser;

pub use board::Board;
pub use game::GameState;
pub use mov::{BatchError, CastleSide, Destination, Move, MoveError, MoveTarget, ResolvedMove};
pub use parser::parse_move;
