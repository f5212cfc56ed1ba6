/// Side length of the standard board.
pub const BOARD_SIZE: usize = 6;
/// Ship lengths of every fleet, in placement order.
pub const FLEET: [usize; 7] = [3, 2, 2, 1, 1, 1, 1];
pub const NUM_SHIPS: usize = FLEET.len();

/// Placement attempts allowed across all ships of a single board build.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 2000;
/// Number of times a failed board build is restarted from scratch.
pub const MAX_FLEET_RESTARTS: usize = 50;

/// Total number of ship cells in a fleet.
pub const TOTAL_SHIP_CELLS: usize = 3 + 2 + 2 + 1 + 1 + 1 + 1;

/// Tunables for board generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub board_size: usize,
    pub placement_attempts: usize,
    pub fleet_restarts: usize,
}

impl GameConfig {
    /// Standard configuration with a different board size.
    pub fn with_board_size(board_size: usize) -> Self {
        Self {
            board_size,
            ..Self::default()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            placement_attempts: MAX_PLACEMENT_ATTEMPTS,
            fleet_restarts: MAX_FLEET_RESTARTS,
        }
    }
}
