//! Discrete input events consumed by the game.
//!
//! Turning raw pointer or key input into these events is the input
//! source's job; the game only ever sees cells and reset requests.

use serde::{Deserialize, Serialize};

/// An event the game state reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameEvent {
    /// The player clicked the cell at `(row, col)`.
    ///
    /// Coordinates are unchecked; off-board values are rejected by the game.
    CellClicked {
        /// Row, top to bottom.
        row: usize,
        /// Column, left to right.
        col: usize,
    },
    /// The player asked for a new match.
    ResetRequested,
}

/// A mark placed during a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Move {
    /// Who moved.
    pub player: super::Player,
    /// Where.
    pub coord: super::Coord,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.coord)
    }
}
