//! Slide axis

/// Axis a piece is confined to.
///
/// A piece's cells advance by `1` (horizontal, within one row) or by the
/// board side length (vertical, within one column). Size-1 walls carry
/// stride 1 by convention but never move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Per-cell index delta along this axis on a board of side `board_size`.
    #[inline]
    pub const fn stride(self, board_size: usize) -> usize {
        match self {
            Axis::Horizontal => 1,
            Axis::Vertical => board_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stride() {
        assert_eq!(Axis::Horizontal.stride(6), 1);
        assert_eq!(Axis::Vertical.stride(6), 6);
    }
}
