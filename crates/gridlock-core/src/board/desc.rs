//! Board description parsing and output.
//!
//! A description is one character per cell in row-major order:
//! `.` or `o` for an empty cell, `x` for a wall cell (each occurrence its
//! own independent wall piece), and any other character as a piece label.
//! All cells sharing a label form one piece, which must be a straight,
//! evenly spaced run of at least 2 cells along one axis.

use std::collections::BTreeMap;
use std::str::FromStr;

use super::Board;
use crate::error::{BoardError, BoardResult};
use crate::types::Piece;

/// Characters treated as empty cells.
const EMPTY: [char; 2] = ['.', 'o'];

/// Wall marker.
const WALL: char = 'x';

/// Labels used when re-emitting a description, in piece-index order.
/// `o` and `x` are reserved by the grammar and skipped.
const OUT_LABELS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnpqrstuvwyz";

impl Board {
    /// Parse a board description.
    ///
    /// Labeled pieces are added in code-point order of their labels, so the
    /// lexicographically first label always becomes piece 0 (the primary
    /// piece). Walls come after all labeled pieces, in ascending cell order.
    /// Any violation fails the whole construction; no partial board escapes.
    pub fn from_desc(desc: &str) -> BoardResult<Board> {
        let length = desc.chars().count();
        let size = length.isqrt();
        if size == 0 {
            return Err(BoardError::EmptyBoard);
        }
        if size * size != length {
            return Err(BoardError::NonSquareBoard { length });
        }

        // Group cell indices by label. Indices are visited in ascending
        // order, so each group is naturally sorted; the BTreeMap keeps the
        // labels themselves in code-point order.
        let mut groups: BTreeMap<char, Vec<usize>> = BTreeMap::new();
        for (index, label) in desc.chars().enumerate() {
            groups.entry(label).or_default().push(index);
        }

        let mut pieces = Vec::new();
        for (&label, cells) in &groups {
            if EMPTY.contains(&label) || label == WALL {
                continue;
            }
            if cells.len() < 2 {
                return Err(BoardError::UndersizedPiece { label, count: cells.len() });
            }
            let stride = cells[1] - cells[0];
            if stride != 1 && stride != size {
                return Err(BoardError::InvalidShape { label });
            }
            if cells.windows(2).any(|w| w[1] - w[0] != stride) {
                return Err(BoardError::InvalidShape { label });
            }
            pieces.push(Piece::new(cells[0], cells.len(), stride));
        }

        if let Some(walls) = groups.get(&WALL) {
            for &cell in walls {
                pieces.push(Piece::wall(cell));
            }
        }

        Ok(Board::from_parts(size, pieces))
    }

    /// Re-emit a canonical description of the current position.
    ///
    /// Pieces are relabeled `A`, `B`, ... in piece-index order (walls stay
    /// `x`, empty cells `o`), so parsing the result yields the same piece
    /// list. Returns `None` when there are more movable pieces than labels.
    pub fn desc(&self) -> Option<String> {
        let mut grid = vec!['o'; self.cell_count()];
        let mut labels = OUT_LABELS.chars();
        for piece in self.pieces() {
            let label = if piece.is_fixed() { WALL } else { labels.next()? };
            for cell in piece.cells() {
                *grid.get_mut(cell)? = label;
            }
        }
        Some(grid.into_iter().collect())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> BoardResult<Board> {
        Board::from_desc(s)
    }
}
