//! Board-level properties over random legal walks, plus an end-to-end
//! scenario on a handcrafted two-move board.

use std::collections::HashSet;

use gridlock_core::{legal_moves, Board, Game, Move};
use proptest::prelude::*;

const CANONICAL: &str = "IBBxooIooLDDJAALooJoKEEMFFKooMGGHHHM";

/// B parks in front of the exit; sliding it out of the way and then sliding
/// A to the edge solves the board in two moves.
const TWO_MOVE: &str = "ooooBoooooBoAAooBooooooooooooooooooo";

fn assert_invariants(board: &Board) {
    let n = board.size();
    let mut seen = HashSet::new();
    for piece in board.pieces() {
        for cell in piece.cells() {
            assert!(cell < board.cell_count(), "cell {cell} out of bounds");
            assert!(seen.insert(cell), "cell {cell} occupied twice");
        }
        let cells: Vec<usize> = piece.cells().collect();
        if piece.stride() == 1 {
            assert!(cells.iter().all(|c| c / n == cells[0] / n), "row straddle");
        } else {
            assert!(cells.iter().all(|c| c % n == cells[0] % n), "column straddle");
        }
    }
}

/// Apply a random legal walk described by `picks`, returning the moves made.
fn walk(board: &mut Board, picks: &[prop::sample::Index]) -> Vec<Move> {
    let mut played = Vec::new();
    for pick in picks {
        let moves = legal_moves(board);
        if moves.is_empty() {
            break;
        }
        let mv = moves[pick.index(moves.len())];
        board.do_move(mv).unwrap();
        played.push(mv);
    }
    played
}

proptest! {
    #[test]
    fn prop_invariants_hold_after_legal_walks(
        picks in prop::collection::vec(any::<prop::sample::Index>(), 0..40)
    ) {
        let mut board: Board = CANONICAL.parse().unwrap();
        walk(&mut board, &picks);
        assert_invariants(&board);
    }

    #[test]
    fn prop_undo_walk_restores_initial_board(
        picks in prop::collection::vec(any::<prop::sample::Index>(), 0..40)
    ) {
        let initial: Board = CANONICAL.parse().unwrap();
        let mut board = initial.clone();
        let played = walk(&mut board, &picks);
        for mv in played.iter().rev() {
            board.undo_move(*mv).unwrap();
        }
        prop_assert_eq!(board, initial);
    }

    #[test]
    fn prop_enumerated_moves_stay_legal_when_applied(
        picks in prop::collection::vec(any::<prop::sample::Index>(), 0..20)
    ) {
        let mut board: Board = TWO_MOVE.parse().unwrap();
        walk(&mut board, &picks);
        // every enumerated move leads to a position that still honors the
        // shape invariants
        for mv in legal_moves(&board) {
            let mut next = board.clone();
            next.do_move(mv).unwrap();
            assert_invariants(&next);
        }
    }
}

#[test]
fn two_move_board_solves_end_to_end() {
    let mut game = Game::from_selector(TWO_MOVE);
    assert!(!game.is_solved());
    assert_invariants(game.board());

    // piece 1 (B) clears the exit row with its maximal forward slide
    let (_, b_max) = game.slide_range(1);
    assert_eq!(b_max, 3);
    assert!(game.play(Move::new(1, b_max)));
    assert!(!game.is_solved());

    // piece 0 (A) now runs unobstructed to the far column
    let (_, a_max) = game.slide_range(0);
    assert_eq!(a_max, 4);
    assert!(game.play(Move::new(0, a_max)));
    assert!(game.is_solved());
    assert_eq!(game.move_count(), 2);
    assert_invariants(game.board());

    // resetting unwinds to the initial, unsolved position
    game.reset();
    assert!(!game.is_solved());
    let initial: Board = TWO_MOVE.parse().unwrap();
    assert_eq!(game.board(), &initial);
}

#[test]
fn canonical_board_initially_has_exactly_one_legal_move() {
    let board: Board = CANONICAL.parse().unwrap();
    let moves = legal_moves(&board);
    // only the rightmost vertical piece can slide up one cell
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0].steps, -1);
}
