//! Piece representation
//!
//! A piece is a rigid run of cells along one axis of the grid. Only its
//! `position` ever changes after construction; `size`, `stride` and `fixed`
//! are immutable for the lifetime of the board that owns it.

use super::Axis;

/// A rigid, axis-aligned run of cells.
///
/// Occupied cells are `position + k * stride` for `k in 0..size`. A piece of
/// size 1 is a wall: immovable and excluded from move generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    position: usize,
    size: usize,
    stride: usize,
    fixed: bool,
}

impl Piece {
    /// Create a movable piece. `stride` must be 1 or the board side length;
    /// the board parser is responsible for enforcing that.
    #[inline]
    pub(crate) const fn new(position: usize, size: usize, stride: usize) -> Piece {
        Piece { position, size, stride, fixed: size == 1 }
    }

    /// Create a size-1 wall at `position`.
    #[inline]
    pub(crate) const fn wall(position: usize) -> Piece {
        Piece { position, size: 1, stride: 1, fixed: true }
    }

    /// Cell index of the anchor (lowest occupied cell).
    #[inline]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Number of cells occupied.
    #[inline]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Per-cell index delta along the piece's axis.
    #[inline]
    pub const fn stride(&self) -> usize {
        self.stride
    }

    /// Whether the piece is an immovable wall.
    #[inline]
    pub const fn is_fixed(&self) -> bool {
        self.fixed
    }

    /// Axis the piece slides along.
    #[inline]
    pub const fn axis(&self) -> Axis {
        if self.stride == 1 {
            Axis::Horizontal
        } else {
            Axis::Vertical
        }
    }

    /// Iterator over the piece's occupied cell indices, in ascending order.
    #[inline]
    pub fn cells(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.size).map(move |k| self.position + k * self.stride)
    }

    /// Whether the piece covers cell `index`.
    #[inline]
    pub fn occupies(&self, index: usize) -> bool {
        self.cells().any(|c| c == index)
    }

    /// Coordinate of the anchor on the piece's own axis (column for
    /// horizontal pieces, row for vertical ones).
    #[inline]
    pub const fn axis_coordinate(&self, board_size: usize) -> usize {
        if self.stride == 1 {
            self.position % board_size
        } else {
            self.position / board_size
        }
    }

    /// Slide the piece by `steps` cells along its axis.
    ///
    /// Legality is the caller's concern; replaying a move that was never in
    /// the legal set leaves the board in an unspecified state.
    #[inline]
    pub(crate) fn shift(&mut self, steps: i32) {
        let delta = self.stride as i64 * steps as i64;
        self.position = (self.position as i64 + delta) as usize;
    }
}
