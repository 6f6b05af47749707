//! Status consistency invariant: the status is whatever the board says.

use super::Invariant;
use crate::{GameState, GameStatus, rules};

/// Invariant: the stored status equals the status derived from the board,
/// and while in progress it is the turn of the player who did not move last.
pub struct StatusConsistentInvariant;

impl Invariant<GameState> for StatusConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        if rules::evaluate_termination(state.board()) != state.status() {
            return false;
        }
        match (state.status(), state.history().last()) {
            (GameStatus::InProgress, Some(last)) => state.current_player() == last.player.opponent(),
            (GameStatus::InProgress, None) => state.current_player() == state.starting_player(),
            (_, last) => last.is_some_and(|mv| mv.player == state.current_player()),
        }
    }

    fn description() -> &'static str {
        "Status is derived from the board and turns follow the last move"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coord, Player};

    #[test]
    fn test_finished_game_holds() {
        let mut state = GameState::new();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            state.apply_move(row, col).unwrap();
        }
        assert!(state.status().is_over());
        assert!(StatusConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_stale_status_violates() {
        let mut state = GameState::new();
        state.apply_move(0, 0).unwrap();
        state.apply_move(1, 0).unwrap();
        let board = state.board_mut();
        board.place(Coord::new(0, 1).unwrap(), Player::X).unwrap();
        board.place(Coord::new(0, 2).unwrap(), Player::X).unwrap();
        assert!(!StatusConsistentInvariant::holds(&state));
    }
}
