use crate::{common::PlayerError, coordinate::Coordinate};
use rand::rngs::SmallRng;
use rand::Rng;

use crate::player::Player;

/// Computer opponent that fires at uniformly random cells. It keeps no shot
/// history; repeats are refused by the enemy board and retried.
#[derive(Debug, Default)]
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for AiPlayer {
    fn name(&self) -> &str {
        "computer"
    }

    fn choose_target(&mut self, rng: &mut SmallRng, size: usize) -> Result<Coordinate, PlayerError> {
        let size = size as i32;
        Ok(Coordinate::new(
            rng.random_range(0..size),
            rng.random_range(0..size),
        ))
    }
}
