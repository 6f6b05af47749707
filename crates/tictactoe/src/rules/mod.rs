//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]; the state machine in
//! [`GameState`](super::GameState) calls [`evaluate_termination`] after
//! every accepted move.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{Line, Orientation, check_winner};

use super::{Board, GameStatus};
use tracing::instrument;

/// Derives the status of a board: a complete line wins, else a full board
/// is drawn, else play continues.
#[instrument(skip(board))]
pub fn evaluate_termination(board: &Board) -> GameStatus {
    if let Some((player, line)) = check_winner(board) {
        GameStatus::Won { player, line }
    } else if is_full(board) {
        GameStatus::Drawn
    } else {
        GameStatus::InProgress
    }
}
