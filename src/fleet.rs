//! Random fleet generation.
//!
//! A board build places every ship of [`FLEET`] in order, sampling bows and
//! orientations until each one fits. Builds that run out of attempts are
//! thrown away and restarted from an empty board.

use rand::Rng;

use crate::board::Board;
use crate::common::BoardError;
use crate::config::{GameConfig, FLEET};
use crate::coordinate::Coordinate;
use crate::ship::{Orientation, Ship};

/// Builds randomized, valid boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FleetPlacer {
    size: usize,
    max_attempts: usize,
    max_restarts: usize,
}

impl FleetPlacer {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            size: config.board_size,
            max_attempts: config.placement_attempts,
            max_restarts: config.fleet_restarts,
        }
    }

    /// Random bow with both axes in `[0, size]`. The upper value lies off the
    /// grid and is rejected by [`Board::place_ship`].
    fn random_ship<R: Rng + ?Sized>(&self, rng: &mut R, length: usize) -> Ship {
        let max = self.size as i32;
        let bow = Coordinate::new(rng.random_range(0..=max), rng.random_range(0..=max));
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        Ship::new(bow, length, orientation)
    }

    /// Try once to place the whole fleet on a fresh board.
    pub fn generate_fleet<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Board, BoardError> {
        let mut board = Board::new(self.size);
        let mut attempts = 0;
        for &length in FLEET.iter() {
            loop {
                attempts += 1;
                if attempts > self.max_attempts {
                    return Err(BoardError::PlacementExhausted);
                }
                match board.place_ship(self.random_ship(rng, length)) {
                    Ok(()) => break,
                    Err(BoardError::InvalidPlacement) => continue,
                    Err(e) => return Err(e),
                }
            }
        }
        log::debug!("fleet placed after {} attempts", attempts);
        board.reset_shot_tracking();
        Ok(board)
    }

    /// Build boards until one succeeds, restarting at most `max_restarts`
    /// times after the first try.
    pub fn generate_valid_board<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Board, BoardError> {
        for restart in 0..=self.max_restarts {
            match self.generate_fleet(rng) {
                Ok(board) => return Ok(board),
                Err(BoardError::PlacementExhausted) => {
                    log::debug!("board build {} exhausted its attempts, restarting", restart);
                }
                Err(e) => return Err(e),
            }
        }
        log::warn!(
            "gave up placing the fleet on a {}x{} board after {} restarts",
            self.size,
            self.size,
            self.max_restarts
        );
        Err(BoardError::FleetUnplaceable)
    }
}

impl Default for FleetPlacer {
    fn default() -> Self {
        FleetPlacer::new(&GameConfig::default())
    }
}
