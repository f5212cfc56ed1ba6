//! Common types for the game: shot outcomes and error kinds.

use alloc::string::String;

/// Result of a shot that landed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// Shot hit open water.
    Miss,
    /// Shot hit a ship that is still afloat.
    Hit,
    /// Shot destroyed the last cell of a ship.
    Sunk,
}

impl ShotOutcome {
    /// Whether the shooter fires again. Only a non-sinking hit repeats.
    pub fn repeats_turn(&self) -> bool {
        matches!(self, ShotOutcome::Hit)
    }
}

impl core::fmt::Display for ShotOutcome {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ShotOutcome::Miss => write!(f, "Miss!"),
            ShotOutcome::Hit => write!(f, "Ship hit!"),
            ShotOutcome::Sunk => write!(f, "Ship destroyed!"),
        }
    }
}

/// Errors returned by Board and fleet operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Target lies outside the grid.
    OutOfBounds,
    /// Target was already shot, or revealed around a sunk ship.
    AlreadyTargeted,
    /// Ship leaves the grid or touches another ship.
    InvalidPlacement,
    /// A single board build ran out of placement attempts.
    PlacementExhausted,
    /// Every restart of the board build failed.
    FleetUnplaceable,
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::OutOfBounds => write!(f, "You are trying to shoot outside the board!"),
            BoardError::AlreadyTargeted => write!(f, "You have already shot at this cell."),
            BoardError::InvalidPlacement => write!(f, "Ship placement is out of bounds or touches another ship"),
            BoardError::PlacementExhausted => write!(f, "Ran out of placement attempts for this board"),
            BoardError::FleetUnplaceable => write!(f, "Unable to place the fleet after repeated restarts"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// Errors a player can raise while choosing a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerError {
    /// The input source reached end of file.
    InputClosed,
    /// Reading from the input source failed.
    Io(String),
}

impl core::fmt::Display for PlayerError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PlayerError::InputClosed => write!(f, "Input closed"),
            PlayerError::Io(msg) => write!(f, "Input error: {}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlayerError {}

/// Errors raised while driving a game session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A move was requested after one fleet was destroyed.
    Finished,
    /// The side to move could not produce a target.
    Player(PlayerError),
}

impl From<PlayerError> for GameError {
    fn from(err: PlayerError) -> Self {
        GameError::Player(err)
    }
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::Finished => write!(f, "The game is already over"),
            GameError::Player(e) => write!(f, "Player error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Player(e) => Some(e),
            GameError::Finished => None,
        }
    }
}
