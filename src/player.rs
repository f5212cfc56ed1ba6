use crate::{
    board::Board,
    common::{BoardError, PlayerError, ShotOutcome},
    coordinate::Coordinate,
};
use rand::rngs::SmallRng;

/// A shot that landed on the enemy board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shot {
    pub target: Coordinate,
    pub outcome: ShotOutcome,
}

/// Interface implemented by different player types.
pub trait Player {
    /// Short label used in logs and messages.
    fn name(&self) -> &str;

    /// Choose the next target on an enemy board of side `size`.
    fn choose_target(&mut self, rng: &mut SmallRng, size: usize) -> Result<Coordinate, PlayerError>;

    /// Inform the player of the result of its last shot.
    fn handle_shot_result(&mut self, _target: Coordinate, _outcome: ShotOutcome) {}

    /// Inform the player that the enemy board refused a target.
    fn handle_rejected_shot(&mut self, _target: Coordinate, _err: BoardError) {}

    /// Pick targets until one is accepted by `enemy`. Rejected targets are
    /// reported and retried; only input failures end the move early.
    fn fire(&mut self, rng: &mut SmallRng, enemy: &mut Board) -> Result<Shot, PlayerError> {
        loop {
            let target = self.choose_target(rng, enemy.size())?;
            match enemy.fire_at(target) {
                Ok(outcome) => {
                    self.handle_shot_result(target, outcome);
                    return Ok(Shot { target, outcome });
                }
                Err(err) => {
                    log::debug!("{} rejected at ({}, {}): {}", self.name(), target.row, target.col, err);
                    self.handle_rejected_shot(target, err);
                }
            }
        }
    }
}
