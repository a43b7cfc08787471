//! Basic types: pieces, moves, axes.

mod axis;
mod moves;
mod piece;

pub use axis::Axis;
pub use moves::{Move, MoveVec};
pub use piece::Piece;
