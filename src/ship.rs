//! Ship definitions and hit tracking.

use core::fmt;

use crate::coordinate::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Cells advance along the column axis.
    Horizontal,
    /// Cells advance along the row axis.
    Vertical,
}

impl Orientation {
    fn step(&self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// A straight run of `length` cells starting at `bow`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    bow: Coordinate,
    length: usize,
    orientation: Orientation,
    remaining_hits: usize,
}

impl Ship {
    /// Create an undamaged ship. Bounds are checked when it is placed.
    pub fn new(bow: Coordinate, length: usize, orientation: Orientation) -> Self {
        Ship {
            bow,
            length,
            orientation,
            remaining_hits: length,
        }
    }

    /// Cells covered by the ship, starting at the bow.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        let (dr, dc) = self.orientation.step();
        let bow = self.bow;
        (0..self.length as i32).map(move |i| bow.offset(dr * i, dc * i))
    }

    /// Returns `true` if `target` is one of the ship's cells.
    pub fn is_hit_by(&self, target: Coordinate) -> bool {
        self.cells().any(|cell| cell == target)
    }

    /// Record one confirmed hit. Never drops below zero.
    pub(crate) fn register_hit(&mut self) {
        self.remaining_hits = self.remaining_hits.saturating_sub(1);
    }

    /// Check if every cell of the ship has been hit.
    pub fn is_destroyed(&self) -> bool {
        self.remaining_hits == 0
    }

    pub fn remaining_hits(&self) -> usize {
        self.remaining_hits
    }

    pub fn bow(&self) -> Coordinate {
        self.bow
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ bow: ({}, {}), length: {}, orientation: {:?}, remaining: {} }}",
            self.bow.row, self.bow.col, self.length, self.orientation, self.remaining_hits,
        )
    }
}
