//! Text rendering of boards and move lists.
//!
//! Consumes only read-only piece geometry (position, size, axis, fixed
//! flag); nothing here feeds back into the model.

use gridlock_core::{Axis, Board, Move};

/// Render the grid with one character per cell, one row per line.
///
/// Pieces are shown with their canonical relabeling (`A` is always the
/// primary piece), walls as `x`, empty cells as `.`. Falls back to index
/// digits if the board has more pieces than labels.
pub fn render_board(board: &Board) -> String {
    let n = board.size();
    let desc = match board.desc() {
        Some(desc) => desc.replace('o', "."),
        None => {
            // more pieces than labels; paint indices mod 10 instead
            let mut grid = vec!['.'; board.cell_count()];
            for (i, piece) in board.pieces().iter().enumerate() {
                let c = char::from_digit((i % 10) as u32, 10).unwrap_or('?');
                for cell in piece.cells() {
                    grid[cell] = c;
                }
            }
            grid.into_iter().collect()
        }
    };

    let mut out = String::new();
    for row in 0..n {
        out.push_str(&desc[row * n..(row + 1) * n]);
        // exit marker on the primary row
        if row == board.primary_row() {
            out.push_str(" =>");
        }
        out.push('\n');
    }
    out
}

/// One line per piece: index, geometry, axis.
pub fn render_pieces(board: &Board) -> String {
    let mut out = String::new();
    for (i, piece) in board.pieces().iter().enumerate() {
        let kind = if piece.is_fixed() {
            "wall"
        } else {
            match piece.axis() {
                Axis::Horizontal => "horizontal",
                Axis::Vertical => "vertical",
            }
        };
        let (x, y) = (piece.position() % board.size(), piece.position() / board.size());
        out.push_str(&format!(
            "  #{i:<2} {kind:<10} size {} at ({x}, {y})\n",
            piece.size()
        ));
    }
    out
}

/// Compact `#piece+steps` / `#piece-steps` notation.
pub fn render_moves(moves: &[Move]) -> String {
    let mut parts: Vec<String> =
        moves.iter().map(|m| format!("#{}{:+}", m.piece, m.steps)).collect();
    parts.sort();
    parts.join(" ")
}
