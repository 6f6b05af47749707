//! Move rejection reasons.

/// Why a move was refused.
///
/// Rejections are ordinary outcomes: the game state is left exactly as it
/// was and the caller simply waits for the next event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidMove {
    /// The match already ended in a win or a draw.
    #[display("Game is already over")]
    GameOver,

    /// The coordinates are not on the board.
    #[display("Cell ({row}, {col}) is off the board")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The cell already holds a mark.
    #[display("Cell ({row}, {col}) is already occupied")]
    Occupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}
