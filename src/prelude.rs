//! Commonly used types and utilities for ease of import.

pub use crate::{
    AiPlayer, Board, BoardError, Coordinate, FleetPlacer, GameConfig, GameSession, Orientation,
    Player, Ship, ShotOutcome, Side,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, CliPlayer};
