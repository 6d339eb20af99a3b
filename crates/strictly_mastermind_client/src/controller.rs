//! Game controller: one active session, one guess, at most one submission in flight.
//!
//! The controller is the single dispatcher for player intents. Every change
//! of settings or restart discards the current session outright and starts a
//! new one through [`SessionLifecycle`]. Submissions are two-phase:
//! [`GameController::begin_submission`] hands out a [`PendingSubmission`]
//! tagged with the session and submission it targets, and
//! [`GameController::complete_submission`] applies the judge's answer only if
//! that submission is still the one awaiting an answer. Each submission is
//! recorded at most once.

use std::sync::Arc;

use derive_getters::Getters;
use strictly_mastermind::{
    AnyGame, Color, Feedback, GameStatus, Guess, GuessBuilder, GuessError, Outcome, SessionId,
    Settings, Solution, Turn, TurnError,
};
use tracing::{debug, info, instrument, warn};

use crate::error::{JudgeError, JudgeErrorKind};
use crate::judge::{Evaluation, Judge};
use crate::lifecycle::SessionLifecycle;

// ─────────────────────────────────────────────────────────────
//  Submission tickets
// ─────────────────────────────────────────────────────────────

/// A guess sent to the judge and not yet answered.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct PendingSubmission {
    /// Session the guess was sent for.
    session_id: SessionId,
    /// Local generation of that session.
    epoch: u64,
    /// Sequence number of this submission within the controller.
    submission: u64,
    /// The guess as colors.
    guess: Guess,
    /// The guess as sent on the wire.
    board: String,
}

/// What happened to a judge answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The turn was recorded; the game now has this status.
    Recorded(GameStatus),
    /// The answer belonged to a superseded session, or to a submission
    /// already answered or abandoned, and was dropped.
    Stale,
}

// ─────────────────────────────────────────────────────────────
//  Errors
// ─────────────────────────────────────────────────────────────

/// Why a player intent was refused.
///
/// All variants leave the controller consistent: no partial history, no
/// status change.
#[derive(Debug, Clone, derive_more::Display)]
pub enum PlayError {
    /// No session is active.
    #[display("No game in progress")]
    NoSession,

    /// Starting a session failed. Retry by restarting.
    #[display("Could not start a game: {}", _0)]
    SessionStart(JudgeError),

    /// A guess is already awaiting the judge.
    #[display("A guess is already being judged")]
    SubmissionPending,

    /// The game is won or lost.
    #[display("Game is already over")]
    GameOver,

    /// The guess still has unset pegs.
    #[display("Guess is incomplete: {}", _0)]
    IncompleteGuess(GuessError),

    /// A peg edit was out of range.
    #[display("Invalid guess: {}", _0)]
    InvalidGuess(GuessError),

    /// The judge could not evaluate the guess. Retry with the same guess.
    #[display("Could not submit guess: {}", _0)]
    SubmissionFailed(JudgeError),

    /// The game refused the judged turn.
    #[display("Turn refused: {}", _0)]
    TurnRejected(TurnError),
}

impl std::error::Error for PlayError {}

impl PlayError {
    /// True if repeating the same intent may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            PlayError::SessionStart(_) | PlayError::SubmissionFailed(_)
        )
    }
}

// ─────────────────────────────────────────────────────────────
//  Controller
// ─────────────────────────────────────────────────────────────

#[derive(Debug)]
struct ActiveSession {
    session_id: SessionId,
    epoch: u64,
    game: AnyGame,
    builder: GuessBuilder,
    /// Sequence number of the submission awaiting the judge.
    pending: Option<u64>,
}

impl ActiveSession {
    /// True only for the ticket of the submission still awaiting an answer.
    fn is_target_of(&self, ticket: &PendingSubmission) -> bool {
        self.session_id == ticket.session_id
            && self.epoch == ticket.epoch
            && self.pending == Some(ticket.submission)
    }

    fn playing(&mut self) -> Result<&mut GuessBuilder, PlayError> {
        if self.game.status().is_terminal() {
            return Err(PlayError::GameOver);
        }
        Ok(&mut self.builder)
    }

    /// Applies a judge answer, always handing the session back.
    fn settle(
        mut self,
        guess: Guess,
        result: Result<Evaluation, JudgeError>,
    ) -> (Self, Result<SubmissionOutcome, PlayError>) {
        self.pending = None;

        let evaluation = match result {
            Ok(evaluation) => evaluation,
            Err(e) => {
                warn!(session_id = %self.session_id, error = %e, "Evaluation failed, guess kept for retry");
                return (self, Err(PlayError::SubmissionFailed(e)));
            }
        };

        let code_length = self.game.settings().code_length();
        let feedback = match Feedback::checked(evaluation.blacks, evaluation.whites, code_length) {
            Ok(feedback) => feedback,
            Err(e) => {
                let error = JudgeError::new(JudgeErrorKind::InvalidResponse, e.to_string());
                return (self, Err(PlayError::SubmissionFailed(error)));
            }
        };

        match self.game.record(guess, feedback, evaluation.solution.as_deref()) {
            Ok(game) => {
                self.game = game;
                self.builder.reset();
                let status = self.game.status();
                info!(
                    session_id = %self.session_id,
                    turn = self.game.history().len(),
                    %feedback,
                    %status,
                    "Turn recorded"
                );
                (self, Ok(SubmissionOutcome::Recorded(status)))
            }
            Err(rejected) => {
                self.game = rejected.game;
                let error = match rejected.error {
                    TurnError::GameOver => PlayError::GameOver,
                    other => PlayError::TurnRejected(other),
                };
                warn!(session_id = %self.session_id, %error, "Judged turn refused");
                (self, Err(error))
            }
        }
    }
}

/// Drives one player's games against a judge.
#[derive(Debug)]
pub struct GameController<J> {
    lifecycle: SessionLifecycle<J>,
    settings: Settings,
    epoch: u64,
    submissions: u64,
    active: Option<ActiveSession>,
}

impl<J: Judge> GameController<J> {
    /// Creates a controller with no session yet.
    ///
    /// Call [`GameController::start`] to begin playing.
    pub fn new(judge: Arc<J>, settings: Settings) -> Self {
        Self {
            lifecycle: SessionLifecycle::new(judge),
            settings,
            epoch: 0,
            submissions: 0,
            active: None,
        }
    }

    /// Discards any current session and starts a new one under the current settings.
    ///
    /// On failure no session is active afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::SessionStart`] if the judge fails either step.
    #[instrument(skip(self), fields(settings = %self.settings))]
    pub async fn start(&mut self) -> Result<SessionId, PlayError> {
        self.epoch = self.epoch.wrapping_add(1);
        if let Some(previous) = self.active.take() {
            info!(
                session_id = %previous.session_id,
                turns = previous.game.history().len(),
                pending = previous.pending.is_some(),
                "Discarding session"
            );
        }

        let session_id = self
            .lifecycle
            .start_session(&self.settings)
            .await
            .map_err(PlayError::SessionStart)?;

        self.active = Some(ActiveSession {
            session_id: session_id.clone(),
            epoch: self.epoch,
            game: AnyGame::new(session_id.clone(), self.settings),
            builder: GuessBuilder::new(&self.settings),
            pending: None,
        });
        debug!(epoch = self.epoch, "Session active");
        Ok(session_id)
    }

    /// Starts over with the same settings.
    ///
    /// # Errors
    ///
    /// See [`GameController::start`].
    pub async fn restart(&mut self) -> Result<SessionId, PlayError> {
        self.start().await
    }

    /// Adopts new settings. Always starts a new session.
    ///
    /// # Errors
    ///
    /// See [`GameController::start`]. The new settings are kept even if the
    /// session fails to start, so a restart retries with them.
    #[instrument(skip(self))]
    pub async fn apply_settings(&mut self, settings: Settings) -> Result<SessionId, PlayError> {
        info!(from = %self.settings, to = %settings, "Settings changed");
        self.settings = settings;
        self.start().await
    }

    /// Settings the next session will use.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Current session, if one is active.
    pub fn session_id(&self) -> Option<&SessionId> {
        self.active.as_ref().map(|a| &a.session_id)
    }

    /// Current game, if a session is active.
    pub fn game(&self) -> Option<&AnyGame> {
        self.active.as_ref().map(|a| &a.game)
    }

    /// Status of the current game.
    pub fn status(&self) -> Option<GameStatus> {
        self.game().map(AnyGame::status)
    }

    /// Recorded turns of the current game; empty without a session.
    pub fn history(&self) -> &[Turn] {
        self.game().map(AnyGame::history).unwrap_or_default()
    }

    /// Outcome, once the current game has ended.
    pub fn outcome(&self) -> Option<&Outcome> {
        self.game().and_then(AnyGame::outcome)
    }

    /// Revealed code, once the current game has ended.
    pub fn solution(&self) -> Option<Solution> {
        self.game().and_then(AnyGame::solution)
    }

    /// The guess being assembled.
    pub fn guess(&self) -> Option<&GuessBuilder> {
        self.active.as_ref().map(|a| &a.builder)
    }

    /// True while a guess awaits the judge.
    pub fn is_pending(&self) -> bool {
        self.active.as_ref().is_some_and(|a| a.pending.is_some())
    }

    /// True when a submit would be accepted: playing, nothing pending, guess complete.
    pub fn can_submit(&self) -> bool {
        self.active.as_ref().is_some_and(|a| {
            a.game.status() == GameStatus::Playing
                && a.pending.is_none()
                && a.builder.is_complete()
        })
    }

    fn active_mut(&mut self) -> Result<&mut ActiveSession, PlayError> {
        self.active.as_mut().ok_or(PlayError::NoSession)
    }

    /// Sets one peg of the guess.
    ///
    /// # Errors
    ///
    /// Fails without a playing session or for an out-of-range position or color.
    #[instrument(skip(self))]
    pub fn set_peg(&mut self, position: usize, color: Color) -> Result<(), PlayError> {
        self.active_mut()?
            .playing()?
            .set_peg(position, color)
            .map_err(PlayError::InvalidGuess)
    }

    /// Unsets one peg of the guess.
    ///
    /// # Errors
    ///
    /// Fails without a playing session or for an out-of-range position.
    #[instrument(skip(self))]
    pub fn clear_peg(&mut self, position: usize) -> Result<(), PlayError> {
        self.active_mut()?
            .playing()?
            .clear_peg(position)
            .map_err(PlayError::InvalidGuess)
    }

    /// Sets every peg from a letter string such as `"ABCD"`.
    ///
    /// # Errors
    ///
    /// Fails without a playing session, or if the letters do not form a
    /// board for the current alphabet and code length. The guess is unchanged
    /// on error.
    #[instrument(skip(self))]
    pub fn fill_guess(&mut self, board: &str) -> Result<(), PlayError> {
        self.active_mut()?
            .playing()?
            .fill_from_board(board)
            .map_err(PlayError::InvalidGuess)
    }

    /// Clears every peg of the guess.
    ///
    /// # Errors
    ///
    /// Fails without a playing session.
    #[instrument(skip(self))]
    pub fn clear_guess(&mut self) -> Result<(), PlayError> {
        self.active_mut()?.playing()?.reset();
        Ok(())
    }

    /// Marks the current guess as in flight and returns its ticket.
    ///
    /// # Errors
    ///
    /// Refuses without a session, after the game ended, while another guess
    /// is pending, or when the guess is incomplete. Nothing changes on error.
    #[instrument(skip(self))]
    pub fn begin_submission(&mut self) -> Result<PendingSubmission, PlayError> {
        let submission = self.submissions.wrapping_add(1);
        let active = self.active_mut()?;
        if active.game.status().is_terminal() {
            warn!(session_id = %active.session_id, "Submit after game over");
            return Err(PlayError::GameOver);
        }
        if active.pending.is_some() {
            warn!(session_id = %active.session_id, "Submit while pending");
            return Err(PlayError::SubmissionPending);
        }

        let guess = active.builder.build().map_err(PlayError::IncompleteGuess)?;
        let board = guess
            .to_board(active.builder.alphabet())
            .map_err(|e| PlayError::InvalidGuess(GuessError::Codec(e)))?;

        active.pending = Some(submission);
        debug!(session_id = %active.session_id, submission, %board, "Submission started");
        let ticket = PendingSubmission {
            session_id: active.session_id.clone(),
            epoch: active.epoch,
            submission,
            guess,
            board,
        };
        self.submissions = submission;
        Ok(ticket)
    }

    /// Gives up on the submission awaiting the judge, if any.
    ///
    /// The guess and history are kept, so the same guess can be submitted
    /// again. An answer that arrives later for the abandoned submission is
    /// dropped as [`SubmissionOutcome::Stale`]. Call this when a
    /// [`GameController::submit_guess`] future is dropped before it finishes,
    /// or when a ticket from [`GameController::begin_submission`] will never
    /// be completed. Returns whether a submission was pending.
    #[instrument(skip(self))]
    pub fn cancel_submission(&mut self) -> bool {
        match self.active.as_mut().and_then(|a| a.pending.take()) {
            Some(submission) => {
                info!(submission, "Pending submission abandoned");
                true
            }
            None => false,
        }
    }

    /// Applies the judge's answer to a ticket from [`GameController::begin_submission`].
    ///
    /// An answer for a session that is no longer current, or for a
    /// submission that was already answered or abandoned, is dropped as
    /// [`SubmissionOutcome::Stale`], leaving history untouched. A failed
    /// evaluation keeps the guess and history so the same guess can be
    /// retried.
    ///
    /// # Errors
    ///
    /// [`PlayError::SubmissionFailed`] for a judge failure or impossible
    /// feedback.
    #[instrument(skip(self, ticket, result), fields(session_id = %ticket.session_id, board = %ticket.board))]
    pub fn complete_submission(
        &mut self,
        ticket: PendingSubmission,
        result: Result<Evaluation, JudgeError>,
    ) -> Result<SubmissionOutcome, PlayError> {
        let Some(active) = self.active.take() else {
            warn!("Answer arrived with no active session, dropping");
            return Ok(SubmissionOutcome::Stale);
        };
        if !active.is_target_of(&ticket) {
            warn!(
                current = %active.session_id,
                submission = ticket.submission,
                "Answer for a superseded submission, dropping"
            );
            self.active = Some(active);
            return Ok(SubmissionOutcome::Stale);
        }

        let (active, outcome) = active.settle(ticket.guess, result);
        self.active = Some(active);
        outcome
    }

    /// Submits the current guess and waits for the judge.
    ///
    /// # Errors
    ///
    /// See [`GameController::begin_submission`] and
    /// [`GameController::complete_submission`].
    #[instrument(skip(self))]
    pub async fn submit_guess(&mut self) -> Result<SubmissionOutcome, PlayError> {
        let ticket = self.begin_submission()?;
        let result = self
            .lifecycle
            .judge()
            .evaluate(&ticket.session_id, &ticket.board)
            .await;
        self.complete_submission(ticket, result)
    }
}
