//! The game state machine.

use super::error::InvalidMove;
use super::event::{GameEvent, Move};
use super::policy::StartingPlayerPolicy;
use super::position::Coord;
use super::rules::{self, Line};
use super::types::{Board, Player};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, serde::Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended with `player` completing `line`.
    Won {
        /// The winner.
        player: Player,
        /// The first complete line, in checking order.
        line: Line,
    },
    /// Every cell is filled and nobody completed a line.
    Drawn,
}

impl GameStatus {
    /// Returns true once the match has been decided.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winning line, if any.
    pub fn winning_line(&self) -> Option<Line> {
        match self {
            GameStatus::Won { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Complete game state.
///
/// Created once and mutated in place by [`apply_move`](Self::apply_move),
/// [`handle`](Self::handle) and [`reset`](Self::reset). The status is always
/// derived from the board; there is no way to set it directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    board: Board,
    current_player: Player,
    status: GameStatus,
    starting_player: Player,
    policy: StartingPlayerPolicy,
    history: Vec<Move>,
}

impl GameState {
    /// Creates a new game where X moves first.
    #[instrument]
    pub fn new() -> Self {
        Self::with_policy(StartingPlayerPolicy::default())
    }

    /// Creates a new game that picks starting players with `policy`.
    #[instrument]
    pub fn with_policy(policy: StartingPlayerPolicy) -> Self {
        let starting_player = policy.first();
        Self {
            board: Board::new(),
            current_player: starting_player,
            status: GameStatus::InProgress,
            starting_player,
            policy,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is, or who made the final move once
    /// the match is over.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the player who opened the current match.
    pub fn starting_player(&self) -> Player {
        self.starting_player
    }

    /// Returns the starting-player policy.
    pub fn policy(&self) -> StartingPlayerPolicy {
        self.policy
    }

    /// Returns the moves of the current match, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Places the current player's mark at `(row, col)`.
    ///
    /// On success the resulting status is returned; the turn passes to the
    /// opponent only while the game is still in progress.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] without touching any state if the match is
    /// over, the coordinates are off the board, or the cell is occupied.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<GameStatus, InvalidMove> {
        if self.status.is_over() {
            debug!("Move rejected: game over");
            return Err(InvalidMove::GameOver);
        }

        let coord = Coord::new(row, col).ok_or(InvalidMove::OutOfRange { row, col })?;
        let player = self.current_player;
        self.board.place(coord, player)?;
        self.history.push(Move { player, coord });

        self.status = rules::evaluate_termination(&self.board);
        match self.status {
            GameStatus::InProgress => self.current_player = player.opponent(),
            GameStatus::Won { player, line } => info!(%player, %line, "Game won"),
            GameStatus::Drawn => info!("Game drawn"),
        }

        debug_assert!(
            crate::invariants::check_state(self).is_ok(),
            "invariants violated after {player} -> {coord}"
        );
        debug!(status = ?self.status, "Move applied");
        Ok(self.status)
    }

    /// Clears the board and starts a new match.
    ///
    /// The opener is chosen by the [`StartingPlayerPolicy`].
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.clear();
        self.history.clear();
        self.status = GameStatus::InProgress;
        self.starting_player = self.policy.next(self.starting_player);
        self.current_player = self.starting_player;
        info!(starting_player = %self.starting_player, "Game reset");
    }

    /// Applies an input event.
    ///
    /// A reset always succeeds and reports [`GameStatus::InProgress`].
    ///
    /// # Errors
    ///
    /// Propagates [`InvalidMove`] from [`apply_move`](Self::apply_move).
    #[instrument(skip(self))]
    pub fn handle(&mut self, event: GameEvent) -> Result<GameStatus, InvalidMove> {
        match event {
            GameEvent::CellClicked { row, col } => self.apply_move(row, col),
            GameEvent::ResetRequested => {
                self.reset();
                Ok(self.status)
            }
        }
    }

    /// Mutable board access so tests can build states no move sequence reaches.
    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Status bar text for the current state.
    pub fn status_message(&self) -> String {
        match self.status {
            GameStatus::InProgress => format!("Player {}'s Turn", self.current_player),
            GameStatus::Won { player, .. } => {
                format!("Player {player} Wins! Press R to Restart")
            }
            GameStatus::Drawn => "It's a Draw! Press R to Restart".to_string(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    fn play(state: &mut GameState, moves: &[(usize, usize)]) -> GameStatus {
        let mut status = state.status();
        for &(row, col) in moves {
            status = state.apply_move(row, col).unwrap();
        }
        status
    }

    #[test]
    fn test_new_game() {
        let state = GameState::new();
        assert_eq!(state.current_player(), Player::X);
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.board(), &Board::new());
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_turn_passes_after_move() {
        let mut state = GameState::new();
        assert_eq!(state.apply_move(1, 1), Ok(GameStatus::InProgress));
        assert_eq!(state.current_player(), Player::O);
        assert_eq!(state.board().get(Coord::new(1, 1).unwrap()), Cell::X);
    }

    #[test]
    fn test_winner_keeps_turn() {
        let mut state = GameState::new();
        play(&mut state, &[(0, 0), (1, 1), (0, 1), (2, 2)]);
        let status = state.apply_move(0, 2).unwrap();
        assert_eq!(
            status,
            GameStatus::Won {
                player: Player::X,
                line: Line::Row0
            }
        );
        assert_eq!(state.current_player(), Player::X);
        assert_eq!(status.winning_line(), Some(Line::Row0));
    }

    #[test]
    fn test_rejection_order() {
        let mut state = GameState::new();
        state.apply_move(0, 0).unwrap();
        assert_eq!(state.apply_move(3, 3), Err(InvalidMove::OutOfRange { row: 3, col: 3 }));
        assert_eq!(state.apply_move(0, 0), Err(InvalidMove::Occupied { row: 0, col: 0 }));

        play(&mut state, &[(1, 0), (0, 1), (1, 1), (0, 2)]);
        assert!(state.status().is_over());
        assert_eq!(state.apply_move(9, 9), Err(InvalidMove::GameOver));
    }

    #[test]
    fn test_status_messages() {
        let mut state = GameState::new();
        assert_eq!(state.status_message(), "Player X's Turn");
        state.apply_move(0, 0).unwrap();
        assert_eq!(state.status_message(), "Player O's Turn");

        play(&mut state, &[(1, 0), (0, 1), (1, 1), (0, 2)]);
        assert_eq!(state.status_message(), "Player X Wins! Press R to Restart");

        state.reset();
        play(
            &mut state,
            &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
        );
        assert_eq!(state.status(), GameStatus::Drawn);
        assert_eq!(state.status_message(), "It's a Draw! Press R to Restart");
    }

    #[test]
    fn test_handle_dispatches_events() {
        let mut state = GameState::new();
        let status = state.handle(GameEvent::CellClicked { row: 2, col: 1 });
        assert_eq!(status, Ok(GameStatus::InProgress));
        assert_eq!(state.history().len(), 1);

        assert_eq!(state.handle(GameEvent::ResetRequested), Ok(GameStatus::InProgress));
        assert!(state.history().is_empty());
        assert_eq!(state.current_player(), Player::X);
    }

    #[test]
    fn test_alternate_policy_swaps_starter() {
        let mut state = GameState::with_policy(StartingPlayerPolicy::Alternate);
        assert_eq!(state.starting_player(), Player::X);
        state.reset();
        assert_eq!(state.starting_player(), Player::O);
        assert_eq!(state.current_player(), Player::O);
        state.apply_move(1, 1).unwrap();
        assert_eq!(state.board().get(Coord::new(1, 1).unwrap()), Cell::O);
        state.reset();
        assert_eq!(state.current_player(), Player::X);
    }
}
