//! Win detection logic for tic-tac-toe.

use super::super::{Board, Coord, Player};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// One of the eight winning triples.
///
/// Variant order is the order in which lines are checked, so the first
/// complete line in this order is the one reported.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum Line {
    /// Top row.
    #[display("row 0")]
    Row0,
    /// Middle row.
    #[display("row 1")]
    Row1,
    /// Bottom row.
    #[display("row 2")]
    Row2,
    /// Left column.
    #[display("column 0")]
    Col0,
    /// Middle column.
    #[display("column 1")]
    Col1,
    /// Right column.
    #[display("column 2")]
    Col2,
    /// (0,0)-(1,1)-(2,2).
    #[display("descending diagonal")]
    DescDiagonal,
    /// (0,2)-(1,1)-(2,0).
    #[display("ascending diagonal")]
    AscDiagonal,
}

/// How a winning line runs across the board, for drawing a strike-through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Along a row; carries the row index.
    Horizontal(usize),
    /// Along a column; carries the column index.
    Vertical(usize),
    /// Top-left to bottom-right.
    Descending,
    /// Bottom-left to top-right.
    Ascending,
}

impl Line {
    /// Cell indices (row-major) of each line, in variant order.
    const INDICES: [[usize; 3]; 8] = [
        [0, 1, 2],
        [3, 4, 5],
        [6, 7, 8],
        [0, 3, 6],
        [1, 4, 7],
        [2, 5, 8],
        [0, 4, 8],
        [2, 4, 6],
    ];

    /// The three cells making up this line.
    pub fn cells(self) -> [Coord; 3] {
        Self::INDICES[self as usize].map(|i| Coord::ALL[i])
    }

    /// Returns true if `coord` lies on this line.
    pub fn contains(self, coord: Coord) -> bool {
        self.cells().contains(&coord)
    }

    /// Direction of the line.
    pub fn orientation(self) -> Orientation {
        match self {
            Line::Row0 => Orientation::Horizontal(0),
            Line::Row1 => Orientation::Horizontal(1),
            Line::Row2 => Orientation::Horizontal(2),
            Line::Col0 => Orientation::Vertical(0),
            Line::Col1 => Orientation::Vertical(1),
            Line::Col2 => Orientation::Vertical(2),
            Line::DescDiagonal => Orientation::Descending,
            Line::AscDiagonal => Orientation::Ascending,
        }
    }
}

/// Checks if there is a winner on the board.
///
/// Returns the owner and the first complete line in [`Line`] order,
/// `None` if no line is complete.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<(Player, Line)> {
    Line::iter().find_map(|line| {
        let [a, b, c] = line.cells().map(|coord| board.get(coord));
        match a.player() {
            Some(player) if a == b && b == c => Some((player, line)),
            _ => None,
        }
    })
}
