//! Draw detection logic for tic-tac-toe.

use super::super::Board;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
///
/// A full board with no winner indicates a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.iter().all(|(_, cell)| !cell.is_empty())
}
