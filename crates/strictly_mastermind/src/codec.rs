//! Mapping between peg colors and their single-letter wire symbols.
//!
//! Color `0` is `A`, color `25` is `Z`. Guesses and secrets travel to the
//! judge as one uppercase letter per peg, left to right.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::settings::{MAX_ALPHABET_SIZE, Settings};

/// A peg color, identified by its index in the alphabet.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
#[display("{_0}")]
pub struct Color(u8);

impl Color {
    /// Creates a color from its index. Range is checked against an [`Alphabet`].
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Returns the index of this color.
    pub const fn index(self) -> u8 {
        self.0
    }
}

/// The active set of colors, `A` up to the alphabet size.
///
/// Encoding and decoding are pure: the same input always yields the same
/// output for a given alphabet size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alphabet {
    size: u8,
}

impl Alphabet {
    /// Creates an alphabet of `size` letters.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidAlphabetSize`] unless `size` is in `[1, 26]`.
    pub fn new(size: u8) -> Result<Self, CodecError> {
        if size == 0 || size > MAX_ALPHABET_SIZE {
            return Err(CodecError::InvalidAlphabetSize(size));
        }
        Ok(Self { size })
    }

    /// The full `A`..=`Z` alphabet.
    pub const fn full() -> Self {
        Self {
            size: MAX_ALPHABET_SIZE,
        }
    }

    /// Number of letters in this alphabet.
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Last letter of this alphabet.
    pub fn last_symbol(&self) -> char {
        char::from(b'A' + self.size - 1)
    }

    /// Iterates over every color in order.
    pub fn colors(&self) -> impl Iterator<Item = Color> + use<> {
        (0..self.size).map(Color)
    }

    /// Returns true if `color` belongs to this alphabet.
    pub fn contains(&self, color: Color) -> bool {
        color.0 < self.size
    }

    /// Maps a color to its letter.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::ColorOutOfRange`] if the color is not in this alphabet.
    pub fn encode(&self, color: Color) -> Result<char, CodecError> {
        if !self.contains(color) {
            return Err(CodecError::ColorOutOfRange {
                color: color.0,
                alphabet_size: self.size,
            });
        }
        Ok(char::from(b'A' + color.0))
    }

    /// Maps a letter back to its color.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::SymbolOutOfRange`] for anything but `A` through
    /// the last letter of this alphabet.
    pub fn decode(&self, symbol: char) -> Result<Color, CodecError> {
        let out_of_range = CodecError::SymbolOutOfRange {
            symbol,
            last: self.last_symbol(),
        };
        if !symbol.is_ascii_uppercase() {
            return Err(out_of_range);
        }
        let color = Color(symbol as u8 - b'A');
        if !self.contains(color) {
            return Err(out_of_range);
        }
        Ok(color)
    }

    /// Encodes a whole row of colors into its wire string.
    ///
    /// # Errors
    ///
    /// Fails on the first color outside this alphabet.
    #[instrument(skip(self), fields(alphabet_size = self.size))]
    pub fn encode_board(&self, colors: &[Color]) -> Result<String, CodecError> {
        colors.iter().map(|c| self.encode(*c)).collect()
    }

    /// Decodes a wire string into colors.
    ///
    /// # Errors
    ///
    /// Fails on the first symbol outside this alphabet.
    #[instrument(skip(self), fields(alphabet_size = self.size))]
    pub fn decode_board(&self, board: &str) -> Result<Vec<Color>, CodecError> {
        board.chars().map(|s| self.decode(s)).collect()
    }
}

impl From<&Settings> for Alphabet {
    fn from(settings: &Settings) -> Self {
        Self {
            size: settings.alphabet_size().clamp(1, MAX_ALPHABET_SIZE),
        }
    }
}

/// Error mapping between colors and symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum CodecError {
    /// Alphabet size outside `[1, 26]`.
    #[display("Alphabet size {} is not between 1 and {}", _0, MAX_ALPHABET_SIZE)]
    InvalidAlphabetSize(u8),

    /// Color index not in the active alphabet.
    #[display("Color {} is outside an alphabet of {}", color, alphabet_size)]
    ColorOutOfRange {
        /// Offending color index.
        color: u8,
        /// Size of the active alphabet.
        alphabet_size: u8,
    },

    /// Symbol not in the active alphabet's letter range.
    #[display("Symbol {:?} is not a letter from A to {}", symbol, last)]
    SymbolOutOfRange {
        /// Offending symbol.
        symbol: char,
        /// Last valid letter.
        last: char,
    },
}

impl std::error::Error for CodecError {}
