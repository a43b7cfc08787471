//! Board representation
//!
//! The board owns the grid dimensions and the ordered piece list. Piece 0 is
//! the primary piece whose exit to the far column defines the solved state.
//! After construction the only mutable state is each piece's position,
//! touched exclusively by [`Board::do_move`] / [`Board::undo_move`].

mod desc;

use crate::error::{BoardError, BoardResult};
use crate::types::{Move, Piece};

/// A parsed, validated grid plus its ordered piece list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Side length N.
    size: usize,
    /// N * N, cached.
    size2: usize,
    /// Labeled pieces in label order, then one wall per `x` cell in
    /// ascending cell order.
    pieces: Vec<Piece>,
    /// Row of piece 0's position at construction time. Fixed thereafter;
    /// renderers use it to place the exit mark.
    primary_row: usize,
}

impl Board {
    /// Side length of the grid.
    #[inline]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Total cell count (`size * size`).
    #[inline]
    pub const fn cell_count(&self) -> usize {
        self.size2
    }

    /// Read-only piece list. Index 0 is the primary piece.
    #[inline]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Piece by index.
    #[inline]
    pub fn piece(&self, index: usize) -> Option<&Piece> {
        self.pieces.get(index)
    }

    /// Row the primary piece occupied at construction time.
    #[inline]
    pub const fn primary_row(&self) -> usize {
        self.primary_row
    }

    /// Index of the piece covering cell `index`, walls included.
    ///
    /// Linear scan over every piece's cells; boards are small fixed grids
    /// (canonically 6x6), so this is never the bottleneck.
    pub fn piece_at(&self, index: usize) -> Option<usize> {
        self.pieces.iter().position(|p| p.occupies(index))
    }

    /// Whether any piece (walls included) covers cell `index`.
    #[inline]
    pub fn is_occupied(&self, index: usize) -> bool {
        self.piece_at(index).is_some()
    }

    /// Apply `mv`, sliding the referenced piece along its axis.
    ///
    /// Only the piece index is validated. Legality against the current
    /// position is the caller's responsibility via
    /// [`crate::movegen::legal_moves`]; this allows replaying moves from a
    /// trusted history without re-validation.
    pub fn do_move(&mut self, mv: Move) -> BoardResult<()> {
        let pieces = self.pieces.len();
        let piece = self
            .pieces
            .get_mut(mv.piece)
            .ok_or(BoardError::InvalidMoveReference { piece: mv.piece, pieces })?;
        piece.shift(mv.steps);
        Ok(())
    }

    /// Exactly reverse a previously applied `mv`.
    pub fn undo_move(&mut self, mv: Move) -> BoardResult<()> {
        self.do_move(mv.inverse())
    }

    /// Whether the primary piece's trailing edge has reached the far column.
    ///
    /// The check compares `column(piece 0) + size(piece 0)` against the board
    /// width and nothing else. It does not confirm piece 0's axis or row, so
    /// a vertical primary piece (or a board whose piece 0 is a wall) can
    /// report solved; that quirk is load-bearing for existing puzzle data
    /// and is kept as-is.
    pub fn is_solved(&self) -> bool {
        match self.pieces.first() {
            None => false,
            Some(piece) => piece.position() % self.size + piece.size() == self.size,
        }
    }

    pub(crate) fn from_parts(size: usize, pieces: Vec<Piece>) -> Board {
        let primary_row = match pieces.first() {
            Some(p) => p.position() / size,
            None => 0,
        };
        Board { size, size2: size * size, pieces, primary_row }
    }
}
