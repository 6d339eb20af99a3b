//! Runtime wrapper over the game phases.

use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

use super::phases::{GameStatus, Outcome};
use super::turn::{Rejected, Turn, TurnError};
use super::typestate::{GameFinished, GameInProgress, GameResult};
use crate::feedback::{Feedback, Solution};
use crate::guess::Guess;
use crate::session::SessionId;
use crate::settings::Settings;

/// A game in either phase, for owners that must hold one value across turns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnyGame {
    /// Guesses are still accepted.
    InProgress(GameInProgress),
    /// Won or lost.
    Finished(GameFinished),
}

impl From<GameInProgress> for AnyGame {
    fn from(game: GameInProgress) -> Self {
        AnyGame::InProgress(game)
    }
}

impl From<GameFinished> for AnyGame {
    fn from(game: GameFinished) -> Self {
        AnyGame::Finished(game)
    }
}

impl From<GameResult> for AnyGame {
    fn from(result: GameResult) -> Self {
        match result {
            GameResult::InProgress(g) => g.into(),
            GameResult::Finished(g) => g.into(),
        }
    }
}

impl AnyGame {
    /// Starts an empty game.
    pub fn new(session_id: SessionId, settings: Settings) -> Self {
        GameInProgress::new(session_id, settings).into()
    }

    /// Records a judged guess.
    ///
    /// # Errors
    ///
    /// A finished game refuses every turn with [`TurnError::GameOver`]; an
    /// in-progress game refuses as [`GameInProgress::record`] does. Either way
    /// the game comes back unchanged.
    #[instrument(skip(self, guess, disclosed), fields(status = %self.status()))]
    pub fn record(
        self,
        guess: Guess,
        feedback: Feedback,
        disclosed: Option<&str>,
    ) -> Result<AnyGame, Rejected<AnyGame>> {
        match self {
            AnyGame::InProgress(game) => game
                .record(guess, feedback, disclosed)
                .map(AnyGame::from)
                .map_err(|rejected| rejected.map(AnyGame::from)),
            AnyGame::Finished(game) => {
                warn!("Turn submitted to a finished game");
                Err(Rejected {
                    game: game.into(),
                    error: TurnError::GameOver,
                })
            }
        }
    }

    /// Current status.
    pub fn status(&self) -> GameStatus {
        match self {
            AnyGame::InProgress(_) => GameStatus::Playing,
            AnyGame::Finished(game) => game.status(),
        }
    }

    /// Recorded turns, oldest first.
    pub fn history(&self) -> &[Turn] {
        match self {
            AnyGame::InProgress(game) => game.history(),
            AnyGame::Finished(game) => game.history(),
        }
    }

    /// Session the game belongs to.
    pub fn session_id(&self) -> &SessionId {
        match self {
            AnyGame::InProgress(game) => game.session_id(),
            AnyGame::Finished(game) => game.session_id(),
        }
    }

    /// Settings the session was created with.
    pub fn settings(&self) -> &Settings {
        match self {
            AnyGame::InProgress(game) => game.settings(),
            AnyGame::Finished(game) => game.settings(),
        }
    }

    /// Outcome, once finished.
    pub fn outcome(&self) -> Option<&Outcome> {
        match self {
            AnyGame::InProgress(_) => None,
            AnyGame::Finished(game) => Some(game.outcome()),
        }
    }

    /// Revealed code, once finished.
    pub fn solution(&self) -> Option<Solution> {
        self.outcome().map(Outcome::solution)
    }
}
