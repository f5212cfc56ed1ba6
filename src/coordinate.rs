//! Grid positions.

use core::fmt;

/// Offsets of a cell and its 8 neighbors.
const NEIGHBORHOOD: [(i32, i32); 9] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 0),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A zero-based `(row, col)` position. Either axis may be negative or past
/// the grid; boards decide what is in bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Coordinate shifted by `(dr, dc)`.
    pub fn offset(&self, dr: i32, dc: i32) -> Self {
        Self::new(self.row + dr, self.col + dc)
    }

    /// This cell and the 8 surrounding it, row by row.
    pub fn neighborhood(self) -> impl Iterator<Item = Coordinate> {
        NEIGHBORHOOD
            .iter()
            .map(move |&(dr, dc)| self.offset(dr, dc))
    }

    /// Chessboard distance: the larger of the row and column gaps.
    pub fn chebyshev_distance(&self, other: &Coordinate) -> u32 {
        self.row
            .abs_diff(other.row)
            .max(self.col.abs_diff(other.col))
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coordinate {
    /// One-based, the way players type coordinates.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row + 1, self.col + 1)
    }
}
