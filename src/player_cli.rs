#![cfg(feature = "std")]

use std::fmt;
use std::io::{self, BufRead, Write};
use std::string::String;

use crate::{
    common::{BoardError, PlayerError, ShotOutcome},
    coordinate::Coordinate,
};
use rand::rngs::SmallRng;

use crate::player::Player;

/// Why a line of input could not be turned into a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The line did not hold exactly two tokens.
    WrongTokenCount(usize),
    /// A token was not a non-negative integer.
    NotANumber(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::WrongTokenCount(_) => write!(f, "Enter 2 coordinates!"),
            InputError::NotANumber(tok) => write!(f, "Enter numbers! '{}' is not a number", tok),
        }
    }
}

/// Parse `"row col"` (1-based) into a zero-based coordinate. A `0` yields a
/// negative axis and numbers too large for `i32` saturate; the board rejects
/// both as out of bounds.
pub fn parse_target(line: &str) -> Result<Coordinate, InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(InputError::WrongTokenCount(tokens.len()));
    }
    let mut axes = [0i32; 2];
    for (axis, tok) in axes.iter_mut().zip(&tokens) {
        if !tok.chars().all(|ch| ch.is_ascii_digit()) {
            return Err(InputError::NotANumber(tok.to_string()));
        }
        // digits only, so parsing can fail on overflow alone
        *axis = tok.parse::<i32>().unwrap_or(i32::MAX);
    }
    Ok(Coordinate::new(axes[0] - 1, axes[1] - 1))
}

/// Interactive player reading targets from a line-based source.
pub struct CliPlayer<R> {
    input: R,
    buf: String,
}

impl CliPlayer<io::StdinLock<'static>> {
    /// Player reading from the process's standard input.
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> CliPlayer<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            buf: String::new(),
        }
    }

    fn read_line(&mut self, prompt: &str) -> Result<&str, PlayerError> {
        print!("{}", prompt);
        io::stdout()
            .flush()
            .map_err(|e| PlayerError::Io(e.to_string()))?;
        self.buf.clear();
        let read = self
            .input
            .read_line(&mut self.buf)
            .map_err(|e| PlayerError::Io(e.to_string()))?;
        if read == 0 {
            println!();
            return Err(PlayerError::InputClosed);
        }
        Ok(self.buf.trim())
    }
}

impl<R: BufRead> Player for CliPlayer<R> {
    fn name(&self) -> &str {
        "user"
    }

    fn choose_target(&mut self, _rng: &mut SmallRng, _size: usize) -> Result<Coordinate, PlayerError> {
        loop {
            let line = self.read_line("Your move: ")?;
            match parse_target(line) {
                Ok(target) => return Ok(target),
                Err(e) => println!("{}", e),
            }
        }
    }

    fn handle_rejected_shot(&mut self, _target: Coordinate, err: BoardError) {
        println!("{}", err);
    }

    fn handle_shot_result(&mut self, target: Coordinate, outcome: ShotOutcome) {
        log::debug!("user fired at {} -> {:?}", target, outcome);
    }
}
