//! Error types for board construction and move application.

/// Failures raised while parsing a board description or applying a move.
///
/// All variants are terminal for the requested operation: a failed parse
/// returns no partial board, a failed move leaves the board untouched.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Description length has integer square root 0.
    #[error("board cannot be empty")]
    EmptyBoard,

    /// Description length is not a perfect square.
    #[error("boards must be square")]
    NonSquareBoard { length: usize },

    /// A non-wall label occurs fewer than 2 times.
    #[error("piece size must be >= 2 (label '{label}' occurs {count} time(s))")]
    UndersizedPiece { label: char, count: usize },

    /// A label's occurrences are not a straight, evenly spaced run along
    /// one axis.
    #[error("invalid piece shape (label '{label}')")]
    InvalidShape { label: char },

    /// A move referenced a piece index outside the current piece list.
    #[error("move references piece {piece} but board has {pieces} piece(s)")]
    InvalidMoveReference { piece: usize, pieces: usize },
}

/// Result type for board operations.
pub type BoardResult<T> = Result<T, BoardError>;
