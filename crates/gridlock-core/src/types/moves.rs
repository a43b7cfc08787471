//! Move representation
//!
//! A move pairs a piece index with a signed step count along that piece's
//! own axis. Moves are ephemeral values; undo histories store them verbatim
//! and replay them through the board's `do_move`/`undo_move`.

use smallvec::SmallVec;

/// Move list buffer.
///
/// Small boards rarely exceed a few dozen legal moves, so this stays on the
/// stack in the common case.
pub type MoveVec = SmallVec<[Move; 64]>;

/// A slide of one piece along its axis.
///
/// `steps` is positive toward higher cell indices (right for horizontal
/// pieces, down for vertical ones) and may have any magnitude inside the
/// piece's unobstructed range; multi-cell slides are single moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    /// Index of the piece in the board's piece list.
    pub piece: usize,
    /// Signed step count along the piece's axis. Never 0 in a legal set.
    pub steps: i32,
}

impl Move {
    #[inline]
    pub const fn new(piece: usize, steps: i32) -> Move {
        Move { piece, steps }
    }

    /// The move that exactly reverses this one.
    #[inline]
    pub const fn inverse(self) -> Move {
        Move { piece: self.piece, steps: -self.steps }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverse() {
        let m = Move::new(3, -2);
        assert_eq!(m.inverse(), Move::new(3, 2));
        assert_eq!(m.inverse().inverse(), m);
    }
}
