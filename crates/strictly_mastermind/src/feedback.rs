//! Black/white peg accounting returned by the judge for each guess.

use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

use crate::codec::Alphabet;

/// Judge response to one guess.
///
/// `blacks` counts pegs right in both color and position. `whites` counts
/// the remaining shared colors at other positions, with multiplicity, never
/// crediting a peg twice. Together they never exceed the code length.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("{blacks} black, {whites} white")]
pub struct Feedback {
    blacks: u8,
    whites: u8,
}

impl Feedback {
    /// Builds feedback for a code of `code_length` pegs.
    ///
    /// # Errors
    ///
    /// Returns [`FeedbackError`] if the counts cannot come from a code of that
    /// length.
    #[instrument]
    pub fn checked(blacks: u32, whites: u32, code_length: u8) -> Result<Self, FeedbackError> {
        let limit = u32::from(code_length);
        if blacks > limit {
            warn!(blacks, code_length, "Too many blacks");
            return Err(FeedbackError::TooManyBlacks { blacks, code_length });
        }
        if blacks.saturating_add(whites) > limit {
            warn!(blacks, whites, code_length, "Too many key pegs");
            return Err(FeedbackError::TooManyPegs {
                blacks,
                whites,
                code_length,
            });
        }
        Ok(Self {
            blacks: blacks as u8,
            whites: whites as u8,
        })
    }

    /// Pegs right in color and position.
    pub fn blacks(&self) -> u8 {
        self.blacks
    }

    /// Pegs right in color only.
    pub fn whites(&self) -> u8 {
        self.whites
    }

    /// True only when every peg is black.
    pub fn is_win(&self, code_length: u8) -> bool {
        self.blacks == code_length
    }

    /// Key pegs for display: blacks, then whites, then empties, `code_length` in all.
    pub fn key_pegs(&self, code_length: u8) -> Vec<KeyPeg> {
        let empties = code_length.saturating_sub(self.blacks.saturating_add(self.whites));
        std::iter::repeat_n(KeyPeg::Black, usize::from(self.blacks))
            .chain(std::iter::repeat_n(KeyPeg::White, usize::from(self.whites)))
            .chain(std::iter::repeat_n(KeyPeg::Empty, usize::from(empties)))
            .collect()
    }
}

/// One key peg in a feedback row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum KeyPeg {
    /// Right color, right position.
    #[strum(to_string = "●")]
    Black,
    /// Right color, wrong position.
    #[strum(to_string = "○")]
    White,
    /// No credit.
    #[strum(to_string = "·")]
    Empty,
}

/// Counts that no code of the given length could produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum FeedbackError {
    /// More blacks than pegs.
    #[display("{} blacks for a code of {} pegs", blacks, code_length)]
    TooManyBlacks {
        /// Reported blacks.
        blacks: u32,
        /// Pegs in the code.
        code_length: u8,
    },

    /// Blacks plus whites exceed the peg count.
    #[display("{} blacks and {} whites for a code of {} pegs", blacks, whites, code_length)]
    TooManyPegs {
        /// Reported blacks.
        blacks: u32,
        /// Reported whites.
        whites: u32,
        /// Pegs in the code.
        code_length: u8,
    },
}

impl std::error::Error for FeedbackError {}

/// The secret as revealed at the end of a game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Solution {
    /// The judge disclosed the code, or the player guessed it.
    Revealed(String),
    /// The judge withheld the code.
    Unknown,
}

impl Solution {
    /// Interprets an optional solution disclosed by the judge.
    ///
    /// Anything that is not a valid board of `code_length` letters from
    /// `alphabet` is treated as withheld.
    #[instrument(skip(alphabet))]
    pub fn from_disclosure(disclosed: Option<&str>, alphabet: &Alphabet, code_length: u8) -> Self {
        let Some(board) = disclosed else {
            return Self::Unknown;
        };
        let valid = board.chars().count() == usize::from(code_length)
            && alphabet.decode_board(board).is_ok();
        if valid {
            Self::Revealed(board.to_string())
        } else {
            warn!(board, "Judge disclosed a malformed solution, treating as unknown");
            Self::Unknown
        }
    }

    /// The letters of the code, if known.
    pub fn board(&self) -> Option<&str> {
        match self {
            Self::Revealed(board) => Some(board),
            Self::Unknown => None,
        }
    }
}

impl std::fmt::Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Revealed(board) => write!(f, "{}", board),
            Self::Unknown => write!(f, "(unknown)"),
        }
    }
}
