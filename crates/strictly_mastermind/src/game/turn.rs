//! One recorded turn and the reasons a turn can be refused.

use serde::{Deserialize, Serialize};

use crate::codec::CodecError;
use crate::feedback::Feedback;
use crate::guess::Guess;

/// A submitted guess together with the judge's feedback.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Turn {
    guess: Guess,
    board: String,
    feedback: Feedback,
}

impl Turn {
    pub(super) fn new(guess: Guess, board: String, feedback: Feedback) -> Self {
        Self {
            guess,
            board,
            feedback,
        }
    }

    /// The guess as colors.
    pub fn guess(&self) -> &Guess {
        &self.guess
    }

    /// The guess as sent on the wire.
    pub fn board(&self) -> &str {
        &self.board
    }

    /// The judge's answer.
    pub fn feedback(&self) -> Feedback {
        self.feedback
    }
}

/// Reason a turn was not recorded. The game is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum TurnError {
    /// The game already finished.
    #[display("Game is already over")]
    GameOver,

    /// The guess does not match the code length.
    #[display("Guess has {} pegs, the code has {}", actual, expected)]
    WrongLength {
        /// Pegs in the code.
        expected: usize,
        /// Pegs in the guess.
        actual: usize,
    },

    /// The guess uses a color outside the game's alphabet.
    #[display("{}", _0)]
    Codec(CodecError),

    /// The feedback cannot belong to a code of this length.
    #[display("Feedback '{}' is impossible for a code of {} pegs", feedback, code_length)]
    ImpossibleFeedback {
        /// The offending feedback.
        feedback: Feedback,
        /// Pegs in the code.
        code_length: u8,
    },
}

impl std::error::Error for TurnError {}

/// A refused turn, handing the untouched game back to the caller.
#[derive(Debug, Clone)]
pub struct Rejected<G> {
    /// The game exactly as it was before the attempt.
    pub game: G,
    /// Why the turn was refused.
    pub error: TurnError,
}

impl<G> Rejected<G> {
    /// Maps the returned game, keeping the error.
    pub fn map<H>(self, f: impl FnOnce(G) -> H) -> Rejected<H> {
        Rejected {
            game: f(self.game),
            error: self.error,
        }
    }
}
