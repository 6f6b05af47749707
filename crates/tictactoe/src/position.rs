//! Board coordinates.

use serde::Serialize;
use tracing::instrument;

/// A validated `(row, col)` coordinate on the 3x3 board.
///
/// Both components are always in `0..3`; the only constructors check it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    /// All 9 coordinates in row-major order.
    pub const ALL: [Coord; 9] = [
        Coord { row: 0, col: 0 },
        Coord { row: 0, col: 1 },
        Coord { row: 0, col: 2 },
        Coord { row: 1, col: 0 },
        Coord { row: 1, col: 1 },
        Coord { row: 1, col: 2 },
        Coord { row: 2, col: 0 },
        Coord { row: 2, col: 1 },
        Coord { row: 2, col: 2 },
    ];

    /// Creates a coordinate, or `None` if either component is out of range.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < 3 && col < 3).then_some(Self { row, col })
    }

    /// Creates a coordinate from a row-major index (0-8).
    #[instrument]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row, top to bottom.
    pub fn row(self) -> usize {
        self.row
    }

    /// Column, left to right.
    pub fn col(self) -> usize {
        self.col
    }

    /// Steps one cell in the given direction, staying put at the edge.
    pub fn step(self, d_row: isize, d_col: isize) -> Self {
        let clamp = |v: usize, d: isize| v.saturating_add_signed(d).min(2);
        Self {
            row: clamp(self.row, d_row),
            col: clamp(self.col, d_col),
        }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(Coord::new(2, 2).is_some());
        assert!(Coord::new(3, 0).is_none());
        assert!(Coord::new(0, 3).is_none());
        assert!(Coord::new(5, 0).is_none());
    }

    #[test]
    fn test_from_index_is_row_major() {
        for (i, coord) in Coord::ALL.iter().enumerate() {
            assert_eq!((coord.row(), coord.col()), (i / 3, i % 3));
            assert_eq!(Coord::from_index(i), Some(*coord));
        }
        assert_eq!(Coord::from_index(9), None);
    }

    #[test]
    fn test_step_clamps_at_edges() {
        let corner = Coord::new(0, 0).unwrap();
        assert_eq!(corner.step(-1, -1), corner);
        assert_eq!(corner.step(1, 0), Coord::new(1, 0).unwrap());
        let far = Coord::new(2, 2).unwrap();
        assert_eq!(far.step(1, 1), far);
        assert_eq!(far.step(0, -1), Coord::new(2, 1).unwrap());
    }
}
