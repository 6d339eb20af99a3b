//! Game status and outcome types.

use serde::{Deserialize, Serialize};

use crate::feedback::Solution;

/// Maximum number of guesses in one game.
pub const TURN_LIMIT: usize = 10;

/// Where a game stands.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIs,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GameStatus {
    /// Guesses are still accepted.
    Playing,
    /// The code was broken. Terminal.
    Won,
    /// The turn limit was reached without breaking the code. Terminal.
    Lost,
}

impl GameStatus {
    /// True for `Won` and `Lost`.
    pub fn is_terminal(self) -> bool {
        !self.is_playing()
    }
}

/// Outcome of a finished game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The player broke the code; the solution is the winning guess.
    Won {
        /// Letters of the winning guess.
        solution: String,
    },
    /// The player ran out of turns.
    Lost {
        /// Whatever the judge disclosed.
        solution: Solution,
    },
}

impl Outcome {
    /// Terminal status for this outcome.
    pub fn status(&self) -> GameStatus {
        match self {
            Outcome::Won { .. } => GameStatus::Won,
            Outcome::Lost { .. } => GameStatus::Lost,
        }
    }

    /// The revealed code.
    pub fn solution(&self) -> Solution {
        match self {
            Outcome::Won { solution } => Solution::Revealed(solution.clone()),
            Outcome::Lost { solution } => solution.clone(),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Won { solution } => write!(f, "You win! The combination was: {}", solution),
            Outcome::Lost { solution } => write!(f, "You lose! The combination was: {}", solution),
        }
    }
}
