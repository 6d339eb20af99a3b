//! Session lifecycle: allocate a session, then have the judge create its secret.

use std::sync::Arc;

use strictly_mastermind::{SessionId, Settings};
use tracing::{error, info, instrument};

use crate::error::JudgeError;
use crate::judge::Judge;

/// Starts judge sessions.
///
/// A session counts as started only after both `start` and `generate`
/// succeed. Nothing is retained from a failed attempt.
#[derive(Debug)]
pub struct SessionLifecycle<J> {
    judge: Arc<J>,
}

impl<J> Clone for SessionLifecycle<J> {
    fn clone(&self) -> Self {
        Self {
            judge: Arc::clone(&self.judge),
        }
    }
}

impl<J: Judge> SessionLifecycle<J> {
    /// Creates a lifecycle manager talking to `judge`.
    pub fn new(judge: Arc<J>) -> Self {
        Self { judge }
    }

    /// The judge sessions are started on.
    pub fn judge(&self) -> &Arc<J> {
        &self.judge
    }

    /// Allocates a session and creates its secret under `settings`.
    ///
    /// # Errors
    ///
    /// Returns the first [`JudgeError`] from either step. A session whose
    /// secret could not be generated is abandoned.
    #[instrument(skip(self))]
    pub async fn start_session(&self, settings: &Settings) -> Result<SessionId, JudgeError> {
        let session = self.judge.start().await?;
        info!(session_id = %session, "Session allocated");

        if let Err(e) = self.judge.generate(&session, settings).await {
            error!(session_id = %session, error = %e, "Secret generation failed, abandoning session");
            return Err(e);
        }

        info!(session_id = %session, "Session started");
        Ok(session)
    }
}
