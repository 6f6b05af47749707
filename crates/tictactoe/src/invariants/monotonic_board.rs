//! Monotonic board invariant: cells never change once marked.

use super::Invariant;
use crate::{Board, GameState};

/// Invariant: replaying the move history onto an empty board reproduces the
/// current board, and no move in the history lands on a marked cell.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(state: &GameState) -> bool {
        let mut replayed = Board::new();
        for mv in state.history() {
            if replayed.place(mv.coord, mv.player).is_err() {
                return false;
            }
        }
        replayed == *state.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
