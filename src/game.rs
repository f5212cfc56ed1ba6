use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::{BoardError, GameError, ShotOutcome},
    config::GameConfig,
    coordinate::Coordinate,
    fleet::FleetPlacer,
    player::Player,
};

/// The two sides of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Side {
    /// Moves first and fires at the computer's board.
    User,
    /// Fires at the user's board.
    Computer,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::User => Side::Computer,
            Side::Computer => Side::User,
        }
    }
}

/// What happened during one call to [`GameSession::play_turn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub side: Side,
    pub target: Coordinate,
    pub outcome: ShotOutcome,
    /// The same side moves again.
    pub repeat: bool,
}

/// Final tally of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSummary {
    pub winner: Option<Side>,
    pub moves: u32,
    pub user_shots: u32,
    pub computer_shots: u32,
}

/// One full game: both boards, both players and the turn order.
pub struct GameSession<U, C> {
    user_board: Board,
    computer_board: Board,
    user: U,
    computer: C,
    to_move: Side,
    moves: u32,
    user_shots: u32,
    computer_shots: u32,
    rng: SmallRng,
}

impl<U: Player, C: Player> GameSession<U, C> {
    /// Generate both fleets and seat the players. The computer's board is
    /// concealed from the user.
    pub fn new(config: &GameConfig, user: U, computer: C, mut rng: SmallRng) -> Result<Self, BoardError> {
        let placer = FleetPlacer::new(config);
        let user_board = placer.generate_valid_board(&mut rng)?;
        let mut computer_board = placer.generate_valid_board(&mut rng)?;
        computer_board.set_concealed(true);
        Ok(Self::with_boards(user_board, computer_board, user, computer, rng))
    }

    /// Seat the players on pre-built boards.
    pub fn with_boards(user_board: Board, computer_board: Board, user: U, computer: C, rng: SmallRng) -> Self {
        Self {
            user_board,
            computer_board,
            user,
            computer,
            to_move: Side::User,
            moves: 0,
            user_shots: 0,
            computer_shots: 0,
            rng,
        }
    }

    /// The user's own board, targeted by the computer.
    pub fn user_board(&self) -> &Board {
        &self.user_board
    }

    /// The computer's board, targeted by the user.
    pub fn computer_board(&self) -> &Board {
        &self.computer_board
    }

    /// Side that moves on the next [`play_turn`](Self::play_turn).
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// Number of accepted shots so far.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Let the side to move fire one accepted shot.
    pub fn play_turn(&mut self) -> Result<TurnReport, GameError> {
        if self.is_over() {
            return Err(GameError::Finished);
        }
        let side = self.to_move;
        let shot = match side {
            Side::User => {
                let shot = self.user.fire(&mut self.rng, &mut self.computer_board)?;
                self.user_shots += 1;
                shot
            }
            Side::Computer => {
                let shot = self.computer.fire(&mut self.rng, &mut self.user_board)?;
                self.computer_shots += 1;
                shot
            }
        };
        self.moves += 1;

        let repeat = shot.outcome.repeats_turn();
        if !repeat {
            self.to_move = side.opponent();
        }
        log::debug!("move {}: {:?} fired at {} -> {:?}", self.moves, side, shot.target, shot.outcome);
        Ok(TurnReport {
            side,
            target: shot.target,
            outcome: shot.outcome,
            repeat,
        })
    }

    /// Returns `true` once either fleet is destroyed.
    pub fn is_over(&self) -> bool {
        self.user_board.all_destroyed() || self.computer_board.all_destroyed()
    }

    /// Side whose opponent's fleet is destroyed.
    pub fn winner(&self) -> Option<Side> {
        if self.computer_board.all_destroyed() {
            Some(Side::User)
        } else if self.user_board.all_destroyed() {
            Some(Side::Computer)
        } else {
            None
        }
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary {
            winner: self.winner(),
            moves: self.moves,
            user_shots: self.user_shots,
            computer_shots: self.computer_shots,
        }
    }

    /// Play until one fleet is destroyed and return the winner.
    pub fn run(&mut self) -> Result<Side, GameError> {
        self.run_with(|_, _| {})
    }

    /// Like [`run`](Self::run), calling `observer` after every move.
    pub fn run_with<F>(&mut self, mut observer: F) -> Result<Side, GameError>
    where
        F: FnMut(&Self, &TurnReport),
    {
        loop {
            if let Some(winner) = self.winner() {
                log::info!("{:?} wins after {} moves", winner, self.moves);
                return Ok(winner);
            }
            let report = self.play_turn()?;
            observer(self, &report);
        }
    }
}
