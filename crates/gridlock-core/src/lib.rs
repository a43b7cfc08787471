//! # gridlock-core
//!
//! Sliding-block puzzle ("Rush Hour" style) engine core.
//!
//! ## Module layout
//!
//! - `types`: basic types (Axis, Piece, Move)
//! - `board`: board representation, description parsing, do_move/undo_move
//! - `movegen`: legal move generation
//! - `game`: one-board session state with a consumer-owned undo stack
//! - `puzzle`: puzzle catalog loading, validation and sampling
//! - `error`: construction- and call-time validation failures
//!
//! The engine is synchronous and single-threaded: every operation runs to
//! completion, and a board is exclusively owned by whichever consumer holds
//! it.

pub mod board;
pub mod error;
pub mod game;
pub mod movegen;
pub mod puzzle;
pub mod types;

pub use board::Board;
pub use error::{BoardError, BoardResult};
pub use game::{Game, DEFAULT_DESC, DEFAULT_MOVES_REQUIRED};
pub use movegen::{legal_moves, piece_moves, slide_range};
pub use puzzle::{Catalog, Puzzle};
pub use types::{Axis, Move, MoveVec, Piece};
