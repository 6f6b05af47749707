//! Core domain types for tic-tac-toe.

use super::error::InvalidMove;
use super::position::Coord;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (opens every match under the default policy).
    #[display("X")]
    X,
    /// Player O.
    #[display("O")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// Contents of one board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Marked by X.
    X,
    /// Marked by O.
    O,
}

impl Cell {
    /// Returns the player owning this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }

    /// Returns true if no mark has been placed here.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Cells only ever go from [`Cell::Empty`] to a mark; the only way back is
/// [`Board::clear`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed as `cells[row][col]`.
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at the given coordinate.
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[coord.row()][coord.col()]
    }

    /// Marks an empty cell for `player`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove::Occupied`] if the cell already holds a mark;
    /// the board is left untouched.
    #[instrument(skip(self), fields(row = coord.row(), col = coord.col()))]
    pub fn place(&mut self, coord: Coord, player: Player) -> Result<(), InvalidMove> {
        let cell = &mut self.cells[coord.row()][coord.col()];
        if !cell.is_empty() {
            return Err(InvalidMove::Occupied {
                row: coord.row(),
                col: coord.col(),
            });
        }
        *cell = player.into();
        Ok(())
    }

    /// Resets every cell to empty.
    pub fn clear(&mut self) {
        self.cells = [[Cell::Empty; 3]; 3];
    }

    /// Iterates over every cell with its coordinate, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        Coord::ALL.into_iter().map(|coord| (coord, self.get(coord)))
    }

    /// Counts the cells marked by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.iter()
            .filter(|(_, cell)| cell.player() == Some(player))
            .count()
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for (r, row) in self.cells.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let symbol = match cell {
                    Cell::Empty => '.',
                    Cell::X => 'X',
                    Cell::O => 'O',
                };
                result.push(symbol);
                if c < 2 {
                    result.push('|');
                }
            }
            if r < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}
