//! Game settings: alphabet size, code length and duplicate policy.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Smallest alphabet a game may use.
pub const MIN_ALPHABET_SIZE: u8 = 2;
/// Largest alphabet a game may use (`A`..=`Z`).
pub const MAX_ALPHABET_SIZE: u8 = 26;
/// Shortest code a game may use.
pub const MIN_CODE_LENGTH: u8 = 2;
/// Longest code a game may use.
pub const MAX_CODE_LENGTH: u8 = 10;

/// Player configuration for a game.
///
/// A `Settings` value is always valid: construct it with [`Settings::new`]
/// (which rejects out-of-range input) or [`Settings::clamped`] (which corrects
/// it). A session never outlives the settings it was created from; applying
/// different settings always starts a new session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Number of colors available, `A` onwards.
    #[serde(alias = "numColors")]
    alphabet_size: u8,
    /// Number of pegs in the secret and in every guess.
    #[serde(alias = "numPegs")]
    code_length: u8,
    /// Whether the secret may repeat a color.
    allow_duplicates: bool,
}

impl Settings {
    /// Creates validated settings.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] if a value is out of range, or if duplicates
    /// are disallowed with fewer colors than pegs.
    #[instrument]
    pub fn new(
        alphabet_size: u8,
        code_length: u8,
        allow_duplicates: bool,
    ) -> Result<Self, SettingsError> {
        let settings = Self {
            alphabet_size,
            code_length,
            allow_duplicates,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Number of colors available.
    pub fn alphabet_size(&self) -> u8 {
        self.alphabet_size
    }

    /// Number of pegs per code.
    pub fn code_length(&self) -> u8 {
        self.code_length
    }

    /// Whether the secret may repeat a color.
    pub fn allow_duplicates(&self) -> bool {
        self.allow_duplicates
    }

    /// Builds settings from raw user input, clamping each value into range.
    ///
    /// When duplicates are disallowed and there are fewer colors than pegs,
    /// the code length is lowered to the alphabet size.
    #[instrument]
    pub fn clamped(colors: i64, pegs: i64, allow_duplicates: bool) -> Self {
        let alphabet_size =
            colors.clamp(i64::from(MIN_ALPHABET_SIZE), i64::from(MAX_ALPHABET_SIZE)) as u8;
        let mut code_length =
            pegs.clamp(i64::from(MIN_CODE_LENGTH), i64::from(MAX_CODE_LENGTH)) as u8;

        if !allow_duplicates && alphabet_size < code_length {
            warn!(
                alphabet_size,
                code_length, "Not enough colors for a code without duplicates, shortening code"
            );
            code_length = alphabet_size;
        }

        debug!(alphabet_size, code_length, allow_duplicates, "Clamped settings");
        Self {
            alphabet_size,
            code_length,
            allow_duplicates,
        }
    }

    /// Checks every range and cross-field constraint.
    ///
    /// Deserialized values bypass the constructors, so callers that read
    /// settings from outside the process must run this before use.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    #[instrument]
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(MIN_ALPHABET_SIZE..=MAX_ALPHABET_SIZE).contains(&self.alphabet_size) {
            return Err(SettingsError::AlphabetSizeOutOfRange(self.alphabet_size));
        }
        if !(MIN_CODE_LENGTH..=MAX_CODE_LENGTH).contains(&self.code_length) {
            return Err(SettingsError::CodeLengthOutOfRange(self.code_length));
        }
        if !self.allow_duplicates && self.alphabet_size < self.code_length {
            return Err(SettingsError::TooFewColorsForUniqueCode {
                alphabet_size: self.alphabet_size,
                code_length: self.code_length,
            });
        }
        Ok(())
    }

    /// Returns a copy with a different alphabet size, clamped like [`Settings::clamped`].
    pub fn with_alphabet_size(self, colors: i64) -> Self {
        Self::clamped(colors, i64::from(self.code_length), self.allow_duplicates)
    }

    /// Returns a copy with a different code length, clamped like [`Settings::clamped`].
    pub fn with_code_length(self, pegs: i64) -> Self {
        Self::clamped(i64::from(self.alphabet_size), pegs, self.allow_duplicates)
    }

    /// Returns a copy with a different duplicate policy, clamped like [`Settings::clamped`].
    pub fn with_allow_duplicates(self, allow_duplicates: bool) -> Self {
        Self::clamped(
            i64::from(self.alphabet_size),
            i64::from(self.code_length),
            allow_duplicates,
        )
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            alphabet_size: 6,
            code_length: 4,
            allow_duplicates: true,
        }
    }
}

impl std::fmt::Display for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} colors, {} pegs, duplicates {}",
            self.alphabet_size,
            self.code_length,
            if self.allow_duplicates { "allowed" } else { "forbidden" }
        )
    }
}

/// A settings value outside the playable range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SettingsError {
    /// Alphabet size outside `[2, 26]`.
    #[display("Alphabet size {} is outside [{}, {}]", _0, MIN_ALPHABET_SIZE, MAX_ALPHABET_SIZE)]
    AlphabetSizeOutOfRange(u8),

    /// Code length outside `[2, 10]`.
    #[display("Code length {} is outside [{}, {}]", _0, MIN_CODE_LENGTH, MAX_CODE_LENGTH)]
    CodeLengthOutOfRange(u8),

    /// Duplicates are forbidden but there are fewer colors than pegs.
    #[display(
        "{} colors cannot fill {} pegs without duplicates",
        alphabet_size,
        code_length
    )]
    TooFewColorsForUniqueCode {
        /// Requested alphabet size.
        alphabet_size: u8,
        /// Requested code length.
        code_length: u8,
    },
}

impl std::error::Error for SettingsError {}
