//! Game session state
//!
//! [`Game`] owns one board at a time plus the undo history: the engine
//! itself stays stateless beyond the board it is given, and the history
//! stack stores only `(piece, steps)` pairs, replayed through
//! `do_move`/`undo_move` rather than snapshotting boards.

use log::warn;

use crate::board::Board;
use crate::movegen::{legal_moves, slide_range};
use crate::types::{Move, MoveVec};

/// Description of the built-in fallback board (6x6, one wall).
pub const DEFAULT_DESC: &str = "IBBxooIooLDDJAALooJoKEEMFFKooMGGHHHM";

/// Move budget shown alongside the fallback board.
pub const DEFAULT_MOVES_REQUIRED: u32 = 60;

/// One puzzle in play: a board, its undo stack, and an optional move budget.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    history: Vec<Move>,
    moves_required: Option<u32>,
}

impl Game {
    /// Start a session on `board`, optionally with a move budget.
    pub fn new(board: Board, moves_required: Option<u32>) -> Game {
        Game { board, history: Vec::new(), moves_required }
    }

    /// Start a session on the built-in fallback board.
    pub fn default_board() -> Game {
        let board = DEFAULT_DESC.parse::<Board>().unwrap_or_else(|_| unreachable!());
        Game { board, history: Vec::new(), moves_required: Some(DEFAULT_MOVES_REQUIRED) }
    }

    /// Load a board selector of the form `"<desc>"` or
    /// `"<desc>/<movesRequired>"`.
    ///
    /// A board that fails to parse falls back to the built-in board rather
    /// than leaving the previous state in place. An unreadable budget suffix
    /// only drops the budget; the board itself is kept.
    pub fn from_selector(selector: &str) -> Game {
        let (desc, budget) = match selector.split_once('/') {
            None => (selector, None),
            Some((desc, rest)) => match rest.parse::<u32>() {
                Ok(n) => (desc, Some(n)),
                Err(_) => {
                    warn!("ignoring invalid move budget in selector {selector:?}");
                    (desc, None)
                }
            },
        };
        match desc.parse::<Board>() {
            Ok(board) => {
                Game { board, history: Vec::new(), moves_required: budget }
            }
            Err(err) => {
                warn!("invalid board in selector {selector:?} ({err}); using fallback board");
                Game::default_board()
            }
        }
    }

    /// Replace the board, clearing the history and budget.
    pub fn set_board(&mut self, board: Board, moves_required: Option<u32>) {
        self.board = board;
        self.history.clear();
        self.moves_required = moves_required;
    }

    /// The board in play.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Optional move budget for the current puzzle.
    #[inline]
    pub fn moves_required(&self) -> Option<u32> {
        self.moves_required
    }

    /// Moves played so far (depth of the undo stack).
    #[inline]
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Moves played so far, oldest first.
    #[inline]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Whether the primary piece has reached the exit column.
    #[inline]
    pub fn is_solved(&self) -> bool {
        self.board.is_solved()
    }

    /// Current legal move set, computed fresh.
    #[inline]
    pub fn legal_moves(&self) -> MoveVec {
        legal_moves(&self.board)
    }

    /// Clamp range for a drag of piece `index`, 0 included.
    #[inline]
    pub fn slide_range(&self, index: usize) -> (i32, i32) {
        slide_range(&self.board, index)
    }

    /// Play `mv` if it is in the current legal set.
    ///
    /// Returns whether the move was applied. Illegal moves (wrong offset,
    /// wall, out-of-range index) are ignored, mirroring an input handler
    /// that drops a drag outside the legal range.
    pub fn play(&mut self, mv: Move) -> bool {
        if !legal_moves(&self.board).contains(&mv) {
            return false;
        }
        // legal implies a valid piece index
        self.board.do_move(mv).unwrap_or_else(|_| unreachable!());
        self.history.push(mv);
        true
    }

    /// Take back the most recent move, if any.
    pub fn undo(&mut self) -> Option<Move> {
        let mv = self.history.pop()?;
        self.board.undo_move(mv).unwrap_or_else(|_| unreachable!());
        Some(mv)
    }

    /// Unwind the whole history, restoring the initial position.
    pub fn reset(&mut self) {
        while self.undo().is_some() {}
    }
}
