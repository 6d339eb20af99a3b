//! Phase-specific game structs.
//!
//! A game is either in progress or finished, and each phase is its own type.
//! Only [`GameInProgress`] accepts turns; a [`GameFinished`] always carries an
//! outcome. Leaving a finished game means starting a new session.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use super::phases::{GameStatus, Outcome, TURN_LIMIT};
use super::turn::{Rejected, Turn, TurnError};
use crate::codec::Alphabet;
use crate::feedback::{Feedback, Solution};
use crate::guess::Guess;
use crate::session::SessionId;
use crate::settings::Settings;

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Game accepting guesses.
///
/// Invariants:
/// - fewer than [`TURN_LIMIT`] turns recorded
/// - no turn so far was a win
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameInProgress {
    session_id: SessionId,
    settings: Settings,
    history: Vec<Turn>,
}

impl GameInProgress {
    /// Starts an empty game for a freshly created session.
    #[instrument(skip(session_id), fields(session_id = %session_id))]
    pub fn new(session_id: SessionId, settings: Settings) -> Self {
        info!(%settings, "New game");
        Self {
            session_id,
            settings,
            history: Vec::with_capacity(TURN_LIMIT),
        }
    }

    /// Checks that a turn could be recorded, without changing anything.
    ///
    /// # Errors
    ///
    /// Returns the [`TurnError`] that [`GameInProgress::record`] would fail with.
    #[instrument(skip(self, guess), fields(session_id = %self.session_id))]
    pub fn check(&self, guess: &Guess, feedback: Feedback) -> Result<String, TurnError> {
        let code_length = self.settings.code_length();
        if guess.len() != usize::from(code_length) {
            return Err(TurnError::WrongLength {
                expected: usize::from(code_length),
                actual: guess.len(),
            });
        }
        let board = guess
            .to_board(&self.alphabet())
            .map_err(TurnError::Codec)?;
        if feedback.blacks().saturating_add(feedback.whites()) > code_length {
            return Err(TurnError::ImpossibleFeedback {
                feedback,
                code_length,
            });
        }
        Ok(board)
    }

    /// Records a judged guess, consuming the game and returning the next phase.
    ///
    /// Precedence: a guess with every peg black wins, whatever the turn
    /// count. Otherwise the game is lost once the history reaches
    /// [`TURN_LIMIT`], revealing whatever the judge disclosed. Otherwise play
    /// continues.
    ///
    /// # Errors
    ///
    /// Hands the untouched game back inside [`Rejected`] if the guess or the
    /// feedback does not fit this game.
    #[instrument(skip(self, guess, disclosed), fields(session_id = %self.session_id, turn = self.history.len() + 1))]
    pub fn record(
        mut self,
        guess: Guess,
        feedback: Feedback,
        disclosed: Option<&str>,
    ) -> Result<GameResult, Rejected<GameInProgress>> {
        let board = match self.check(&guess, feedback) {
            Ok(board) => board,
            Err(error) => {
                warn!(%error, "Turn rejected");
                return Err(Rejected { game: self, error });
            }
        };
        debug_assert!(self.history.len() < TURN_LIMIT, "in-progress game at turn limit");

        let code_length = self.settings.code_length();
        self.history.push(Turn::new(guess, board.clone(), feedback));
        debug!(%board, %feedback, "Turn recorded");

        if feedback.is_win(code_length) {
            info!(turns = self.history.len(), "Code broken");
            return Ok(GameResult::Finished(self.finish(Outcome::Won { solution: board })));
        }

        if self.history.len() >= TURN_LIMIT {
            let solution = Solution::from_disclosure(disclosed, &self.alphabet(), code_length);
            info!(%solution, "Turn limit reached");
            return Ok(GameResult::Finished(self.finish(Outcome::Lost { solution })));
        }

        Ok(GameResult::InProgress(self))
    }

    fn finish(self, outcome: Outcome) -> GameFinished {
        GameFinished {
            session_id: self.session_id,
            settings: self.settings,
            history: self.history,
            outcome,
        }
    }

    /// Alphabet the game is played with.
    pub fn alphabet(&self) -> Alphabet {
        Alphabet::from(&self.settings)
    }

    /// Session this game belongs to.
    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// Settings the session was created with.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Recorded turns, oldest first.
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Guesses still available.
    pub fn turns_remaining(&self) -> usize {
        TURN_LIMIT.saturating_sub(self.history.len())
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Game over, outcome determined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameFinished {
    session_id: SessionId,
    settings: Settings,
    history: Vec<Turn>,
    outcome: Outcome,
}

impl GameFinished {
    /// How the game ended.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// `Won` or `Lost`.
    pub fn status(&self) -> GameStatus {
        self.outcome.status()
    }

    /// Session this game belonged to.
    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// Settings the session was created with.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Recorded turns, oldest first.
    pub fn history(&self) -> &[Turn] {
        &self.history
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Phase after recording a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameResult {
    /// More guesses allowed.
    InProgress(GameInProgress),
    /// Won or lost.
    Finished(GameFinished),
}

impl GameResult {
    /// Status of the resulting phase.
    pub fn status(&self) -> GameStatus {
        match self {
            GameResult::InProgress(_) => GameStatus::Playing,
            GameResult::Finished(game) => game.status(),
        }
    }
}
