//! Guess assembly: one slot per peg, filled one at a time.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::codec::{Alphabet, CodecError, Color};
use crate::settings::Settings;

/// A complete guess: exactly one color per peg.
///
/// Only a [`GuessBuilder`] hands these out, so a `Guess` is never partial.
/// Duplicate colors are allowed even when the secret forbids them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Guess {
    pegs: Vec<Color>,
}

impl Guess {
    /// Colors left to right.
    pub fn pegs(&self) -> &[Color] {
        &self.pegs
    }

    /// Number of pegs.
    pub fn len(&self) -> usize {
        self.pegs.len()
    }

    /// Always false for a guess built against valid settings.
    pub fn is_empty(&self) -> bool {
        self.pegs.is_empty()
    }

    /// Wire representation: one uppercase letter per peg.
    ///
    /// # Errors
    ///
    /// Fails if a peg lies outside `alphabet`.
    pub fn to_board(&self, alphabet: &Alphabet) -> Result<String, CodecError> {
        alphabet.encode_board(&self.pegs)
    }
}

/// Accumulates the in-progress guess.
///
/// Slots start unset. [`GuessBuilder::build`] succeeds only once every slot
/// holds a color of the active alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessBuilder {
    alphabet: Alphabet,
    slots: Vec<Option<Color>>,
}

impl GuessBuilder {
    /// Creates an empty builder sized for `settings`.
    #[instrument]
    pub fn new(settings: &Settings) -> Self {
        Self {
            alphabet: Alphabet::from(settings),
            slots: vec![None; usize::from(settings.code_length())],
        }
    }

    /// The alphabet colors are checked against.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Current slots, `None` where no color is chosen yet.
    pub fn slots(&self) -> &[Option<Color>] {
        &self.slots
    }

    /// Number of pegs in the guess.
    pub fn code_length(&self) -> usize {
        self.slots.len()
    }

    /// Sets the color of one slot.
    ///
    /// # Errors
    ///
    /// Rejects a position outside the code or a color outside the alphabet;
    /// the builder is unchanged on error.
    #[instrument(skip(self))]
    pub fn set_peg(&mut self, position: usize, color: Color) -> Result<(), GuessError> {
        if position >= self.slots.len() {
            warn!(position, code_length = self.slots.len(), "Peg position out of range");
            return Err(GuessError::PositionOutOfRange {
                position,
                code_length: self.slots.len(),
            });
        }
        if !self.alphabet.contains(color) {
            warn!(color = color.index(), alphabet_size = self.alphabet.size(), "Color out of range");
            return Err(GuessError::ColorOutOfRange {
                color: color.index(),
                alphabet_size: self.alphabet.size(),
            });
        }
        self.slots[position] = Some(color);
        debug!(position, color = color.index(), "Peg set");
        Ok(())
    }

    /// Unsets one slot.
    ///
    /// # Errors
    ///
    /// Rejects a position outside the code.
    #[instrument(skip(self))]
    pub fn clear_peg(&mut self, position: usize) -> Result<(), GuessError> {
        let code_length = self.slots.len();
        let slot = self
            .slots
            .get_mut(position)
            .ok_or(GuessError::PositionOutOfRange {
                position,
                code_length,
            })?;
        *slot = None;
        Ok(())
    }

    /// Sets every slot from a letter string such as `"ABCD"`.
    ///
    /// Lowercase letters are accepted. Nothing is changed unless the whole
    /// string is valid.
    ///
    /// # Errors
    ///
    /// Fails if the length differs from the code length or a letter is
    /// outside the alphabet.
    #[instrument(skip(self))]
    pub fn fill_from_board(&mut self, board: &str) -> Result<(), GuessError> {
        let symbols: Vec<char> = board.trim().chars().map(|c| c.to_ascii_uppercase()).collect();
        if symbols.len() != self.slots.len() {
            return Err(GuessError::WrongLength {
                expected: self.slots.len(),
                actual: symbols.len(),
            });
        }
        let colors = symbols
            .into_iter()
            .map(|s| self.alphabet.decode(s))
            .collect::<Result<Vec<_>, _>>()
            .map_err(GuessError::Codec)?;

        self.slots = colors.into_iter().map(Some).collect();
        debug!("Guess filled from board");
        Ok(())
    }

    /// True iff every slot is set.
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Returns the complete guess without clearing the builder.
    ///
    /// # Errors
    ///
    /// Returns [`GuessError::Incomplete`] with the first unset position.
    #[instrument(skip(self))]
    pub fn build(&self) -> Result<Guess, GuessError> {
        let pegs = self
            .slots
            .iter()
            .enumerate()
            .map(|(position, slot)| slot.ok_or(GuessError::Incomplete { position }))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Guess { pegs })
    }

    /// Clears every slot.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        debug!("Guess reset");
    }
}

/// Error building a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GuessError {
    /// Position outside `[0, code_length)`.
    #[display("Peg {} is outside a code of length {}", position, code_length)]
    PositionOutOfRange {
        /// Offending position.
        position: usize,
        /// Pegs in the code.
        code_length: usize,
    },

    /// Color outside `[0, alphabet_size)`.
    #[display("Color {} is outside an alphabet of {}", color, alphabet_size)]
    ColorOutOfRange {
        /// Offending color index.
        color: u8,
        /// Colors in the alphabet.
        alphabet_size: u8,
    },

    /// Board string of the wrong length.
    #[display("Expected {} pegs, got {}", expected, actual)]
    WrongLength {
        /// Pegs in the code.
        expected: usize,
        /// Letters supplied.
        actual: usize,
    },

    /// A slot is still unset.
    #[display("Peg {} has no color yet", position)]
    Incomplete {
        /// First unset position.
        position: usize,
    },

    /// A letter could not be decoded.
    #[display("{}", _0)]
    Codec(CodecError),
}

impl std::error::Error for GuessError {}
