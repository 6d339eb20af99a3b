//! Strictly Mastermind - pure code-breaking game logic.
//!
//! Everything here is free of I/O. The secret and the black/white feedback
//! come from an external judge; this crate only encodes guesses for it and
//! tracks what happens to a session.
//!
//! # Architecture
//!
//! - **Settings**: alphabet size, code length, duplicate policy
//! - **Codec**: color index to letter and back (`0` is `A`)
//! - **Guess**: slot-by-slot builder and the complete [`Guess`]
//! - **Feedback**: black/white counts, key pegs, revealed [`Solution`]
//! - **Game**: typestate phases [`GameInProgress`] and [`GameFinished`]
//!
//! # Example
//!
//! ```
//! use strictly_mastermind::{AnyGame, Feedback, GameStatus, GuessBuilder, SessionId, Settings};
//!
//! let settings = Settings::default();
//! let mut builder = GuessBuilder::new(&settings);
//! builder.fill_from_board("CCDD").unwrap();
//!
//! let game = AnyGame::new(SessionId::new("s1"), settings);
//! let feedback = Feedback::checked(4, 0, settings.code_length()).unwrap();
//! let game = game.record(builder.build().unwrap(), feedback, None).unwrap();
//! assert_eq!(game.status(), GameStatus::Won);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod codec;
mod feedback;
mod game;
mod guess;
mod session;
mod settings;

pub use codec::{Alphabet, CodecError, Color};
pub use feedback::{Feedback, FeedbackError, KeyPeg, Solution};
pub use game::{
    AnyGame, GameFinished, GameInProgress, GameResult, GameStatus, Outcome, Rejected, TURN_LIMIT,
    Turn, TurnError,
};
pub use guess::{Guess, GuessBuilder, GuessError};
pub use session::SessionId;
pub use settings::{
    MAX_ALPHABET_SIZE, MAX_CODE_LENGTH, MIN_ALPHABET_SIZE, MIN_CODE_LENGTH, Settings,
    SettingsError,
};
