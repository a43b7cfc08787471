//! Legal move generation
//!
//! Pure functions over a [`Board`]: no cached state, computed fresh on every
//! call. For each movable piece the generator scans outward along the
//! piece's axis one cell at a time, in both directions, stopping at the
//! first occupied cell or the board edge; every offset reached on the way is
//! its own legal move (pieces may slide multiple cells in one move).

use crate::board::Board;
use crate::types::{Move, MoveVec};

/// Enumerate every legal move on `board`. Walls are skipped.
pub fn legal_moves(board: &Board) -> MoveVec {
    let mut moves = MoveVec::new();
    for index in 0..board.pieces().len() {
        piece_moves(board, index, &mut moves);
    }
    moves
}

/// Append the legal moves of piece `index` to `moves`.
///
/// Out-of-range indices and walls contribute nothing.
pub fn piece_moves(board: &Board, index: usize, moves: &mut MoveVec) {
    let size = board.size();
    let piece = match board.piece(index) {
        Some(p) if !p.is_fixed() => *p,
        _ => return,
    };

    // Bounds on the piece's own axis: backward until the anchor reaches
    // coordinate 0, forward until the far end reaches the edge.
    let coord = piece.axis_coordinate(size) as i32;
    let reverse_steps = -coord;
    let forward_steps = size as i32 - piece.size() as i32 - coord;

    // Walk backward from the cell just behind the anchor.
    let mut cell = piece.position() as i64 - piece.stride() as i64;
    let mut steps = -1;
    while steps >= reverse_steps {
        if board.is_occupied(cell as usize) {
            break;
        }
        moves.push(Move::new(index, steps));
        cell -= piece.stride() as i64;
        steps -= 1;
    }

    // Walk forward from the cell just beyond the far end.
    let mut cell = piece.position() + piece.size() * piece.stride();
    for steps in 1..=forward_steps {
        if board.is_occupied(cell) {
            break;
        }
        moves.push(Move::new(index, steps));
        cell += piece.stride();
    }
}

/// Minimum and maximum legal step counts for piece `index`, 0 included.
///
/// This is the range an input handler clamps a drag offset to. Walls and
/// out-of-range indices yield `(0, 0)`.
pub fn slide_range(board: &Board, index: usize) -> (i32, i32) {
    let mut moves = MoveVec::new();
    piece_moves(board, index, &mut moves);
    moves.iter().fold((0, 0), |(lo, hi), m| (lo.min(m.steps), hi.max(m.steps)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANONICAL: &str = "IBBxooIooLDDJAALooJoKEEMFFKooMGGHHHM";

    fn moves_of(board: &Board, index: usize) -> Vec<i32> {
        let mut steps: Vec<i32> =
            legal_moves(board).iter().filter(|m| m.piece == index).map(|m| m.steps).collect();
        steps.sort_unstable();
        steps
    }

    #[test]
    fn test_unobstructed_range_matches_edges() {
        // single horizontal piece in the middle row of an otherwise empty
        // 5x5 board: anchor at column 1, so 1 step back and 2 forward
        let board: Board = "oooooooooooAAoooooooooooo".parse().unwrap();
        assert_eq!(moves_of(&board, 0), vec![-1, 1, 2]);
    }

    #[test]
    fn test_blocker_truncates_range() {
        // same layout with a wall at distance 2 ahead: the cell behind the
        // wall stays reachable, the wall cell and beyond do not
        let board: Board = "oooooooooooAAoxoooooooooo".parse().unwrap();
        assert_eq!(moves_of(&board, 0), vec![-1, 1]);

        // wall immediately ahead: forward direction fully blocked
        let board: Board = "oooooooooooAAxooooooooooo".parse().unwrap();
        assert_eq!(moves_of(&board, 0), vec![-1]);
    }

    #[test]
    fn test_blocking_piece_truncates_like_wall() {
        // vertical piece B crosses A's row two cells ahead of A's far end,
        // so only the single step up to the blocker survives
        let board: Board = "oooBoooooBooAAoBoooooooooooooooooooo".parse().unwrap();
        assert_eq!(moves_of(&board, 0), vec![1]);
    }

    #[test]
    fn test_vertical_piece_range() {
        // vertical size-2 piece anchored in row 1 of a 4x4 board
        let board: Board = "ooooAoooAooooooo".parse().unwrap();
        assert_eq!(moves_of(&board, 0), vec![-1, 1]);
    }

    #[test]
    fn test_walls_generate_no_moves() {
        let board: Board = "xoooooooooooAAoo".parse().unwrap();
        let wall_index = board.pieces().iter().position(|p| p.is_fixed()).unwrap();
        assert!(legal_moves(&board).iter().all(|m| m.piece != wall_index));
    }

    #[test]
    fn test_canonical_board_moves_are_legal() {
        let board: Board = CANONICAL.parse().unwrap();
        let moves = legal_moves(&board);
        assert!(!moves.is_empty());
        for mv in &moves {
            assert!(mv.steps != 0);
            assert!(!board.pieces()[mv.piece].is_fixed());
            // applying and undoing any enumerated move round-trips
            let mut b = board.clone();
            b.do_move(*mv).unwrap();
            b.undo_move(*mv).unwrap();
            assert_eq!(b, board);
        }
    }

    #[test]
    fn test_offsets_are_contiguous_runs() {
        let board: Board = CANONICAL.parse().unwrap();
        for index in 0..board.pieces().len() {
            let steps = moves_of(&board, index);
            if steps.is_empty() {
                continue;
            }
            // with 0 inserted, the run from min to max has no holes
            let lo = steps[0].min(0);
            let hi = *steps.last().unwrap().max(&0);
            let mut expected: Vec<i32> = (lo..=hi).filter(|&s| s != 0).collect();
            expected.sort_unstable();
            assert_eq!(steps, expected);
        }
    }

    #[test]
    fn test_slide_range() {
        let board: Board = "oooooooooooAAoooooooooooo".parse().unwrap();
        assert_eq!(slide_range(&board, 0), (-1, 2));
        // out of range piece index
        assert_eq!(slide_range(&board, 99), (0, 0));
    }
}
