//! Game board state: grid, placed ships, reserved cells and shot resolution.

use alloc::collections::BTreeSet;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::common::{BoardError, ShotOutcome};
use crate::config::BOARD_SIZE;
use crate::coordinate::Coordinate;
use crate::ship::Ship;

/// Display state of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Ship,
    Miss,
    Hit,
    /// Water around a sunk ship, revealed once the ship went down.
    Buffer,
}

/// One player's side of the ocean.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    grid: Vec<Cell>,
    ships: Vec<Ship>,
    occupied_or_buffered: BTreeSet<Coordinate>,
    already_shot: BTreeSet<Coordinate>,
    destroyed_count: usize,
    concealed: bool,
}

impl Board {
    /// Create an empty `size`×`size` board with no ships.
    pub fn new(size: usize) -> Self {
        Board {
            size,
            grid: vec![Cell::Empty; size * size],
            ships: Vec::new(),
            occupied_or_buffered: BTreeSet::new(),
            already_shot: BTreeSet::new(),
            destroyed_count: 0,
            concealed: false,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if either axis falls outside `[0, size)`.
    pub fn is_out_of_bounds(&self, c: Coordinate) -> bool {
        self.index(c).is_none()
    }

    fn index(&self, c: Coordinate) -> Option<usize> {
        let size = self.size as i64;
        let (row, col) = (c.row as i64, c.col as i64);
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Some((row * size + col) as usize)
        } else {
            None
        }
    }

    /// Cell state at `c`, or `None` off the grid.
    pub fn cell(&self, c: Coordinate) -> Option<Cell> {
        self.index(c).map(|i| self.grid[i])
    }

    fn set_cell(&mut self, c: Coordinate, cell: Cell) {
        if let Some(i) = self.index(c) {
            self.grid[i] = cell;
        }
    }

    /// Grid rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks panics on zero
        self.grid.chunks(self.size.max(1))
    }

    /// Placed ships in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn destroyed_count(&self) -> usize {
        self.destroyed_count
    }

    /// Returns `true` if `c` is a ship cell or part of a ship's buffer.
    pub fn is_reserved(&self, c: Coordinate) -> bool {
        self.occupied_or_buffered.contains(&c)
    }

    /// Returns `true` if `c` can no longer be fired at.
    pub fn is_targeted(&self, c: Coordinate) -> bool {
        self.already_shot.contains(&c)
    }

    /// Whether ship cells are hidden when rendered.
    pub fn is_concealed(&self) -> bool {
        self.concealed
    }

    pub fn set_concealed(&mut self, concealed: bool) {
        self.concealed = concealed;
    }

    /// Place a ship. Fails if the ship is empty or longer than the grid, or if
    /// any cell is off the grid or inside another ship's cells or buffer.
    pub fn place_ship(&mut self, ship: Ship) -> Result<(), BoardError> {
        if ship.length() == 0 || ship.length() > self.size {
            return Err(BoardError::InvalidPlacement);
        }
        if ship
            .cells()
            .any(|c| self.is_out_of_bounds(c) || self.occupied_or_buffered.contains(&c))
        {
            return Err(BoardError::InvalidPlacement);
        }
        for c in ship.cells() {
            self.set_cell(c, Cell::Ship);
            self.occupied_or_buffered.insert(c);
        }
        self.ships.push(ship);
        self.reserve_buffer(&ship);
        log::trace!("placed {:?}", ship);
        Ok(())
    }

    fn reserve_buffer(&mut self, ship: &Ship) {
        for c in ship.cells().flat_map(Coordinate::neighborhood) {
            if !self.is_out_of_bounds(c) {
                self.occupied_or_buffered.insert(c);
            }
        }
    }

    /// Mark the unshot water around a sunk ship as revealed. Those cells can
    /// no longer be fired at.
    fn reveal_buffer(&mut self, ship: &Ship) {
        for c in ship.cells().flat_map(Coordinate::neighborhood) {
            if !self.is_out_of_bounds(c) && self.already_shot.insert(c) {
                self.set_cell(c, Cell::Buffer);
            }
        }
    }

    /// Fire at `target`, updating ship state and the grid.
    pub fn fire_at(&mut self, target: Coordinate) -> Result<ShotOutcome, BoardError> {
        if self.is_out_of_bounds(target) {
            return Err(BoardError::OutOfBounds);
        }
        if !self.already_shot.insert(target) {
            return Err(BoardError::AlreadyTargeted);
        }

        let hit = self
            .ships
            .iter_mut()
            .find(|ship| ship.is_hit_by(target))
            .map(|ship| {
                ship.register_hit();
                *ship
            });

        let outcome = match hit {
            Some(ship) => {
                self.set_cell(target, Cell::Hit);
                if ship.is_destroyed() {
                    self.destroyed_count += 1;
                    self.reveal_buffer(&ship);
                    ShotOutcome::Sunk
                } else {
                    ShotOutcome::Hit
                }
            }
            None => {
                self.set_cell(target, Cell::Miss);
                ShotOutcome::Miss
            }
        };
        log::trace!("shot at ({}, {}) -> {:?}", target.row, target.col, outcome);
        Ok(outcome)
    }

    /// Forget every shot. Used once after placement so play starts clean.
    pub fn reset_shot_tracking(&mut self) {
        self.already_shot.clear();
    }

    /// Returns `true` when every placed ship is destroyed.
    pub fn all_destroyed(&self) -> bool {
        self.destroyed_count == self.ships.len()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new(BOARD_SIZE)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  size: {},\n  ships: {:?},\n  destroyed: {},\n  shots: {},\n  concealed: {}\n}}",
            self.size,
            self.ships,
            self.destroyed_count,
            self.already_shot.len(),
            self.concealed
        )
    }
}
