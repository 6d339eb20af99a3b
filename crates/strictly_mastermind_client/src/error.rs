//! Judge connection error types.

use derive_more::{Display, Error};
use tracing::{error, instrument};

/// What went wrong talking to the judge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum JudgeErrorKind {
    /// The request never got a response (connect, timeout, TLS).
    #[strum(to_string = "transport")]
    Transport,
    /// The judge answered with a non-success HTTP status.
    #[strum(to_string = "status")]
    Status,
    /// The response body was not the expected JSON.
    #[strum(to_string = "decode")]
    Decode,
    /// The judge explicitly refused (`success: false`).
    #[strum(to_string = "rejected")]
    Rejected,
    /// The response parsed but its content is impossible.
    #[strum(to_string = "invalid response")]
    InvalidResponse,
}

/// Judge request failure with location tracking.
///
/// Every judge failure is retryable from the player's point of view.
#[derive(Debug, Clone, Display, Error)]
#[display("Judge error ({}): {} at {}:{}", kind, message, file, line)]
pub struct JudgeError {
    /// Failure category.
    pub kind: JudgeErrorKind,
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl JudgeError {
    /// Creates a new judge error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(kind: JudgeErrorKind, message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        let message = message.into();
        error!(%kind, error_message = %message, "Judge error created");
        Self {
            kind,
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<reqwest::Error> for JudgeError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_decode() {
            JudgeErrorKind::Decode
        } else if err.is_status() {
            JudgeErrorKind::Status
        } else {
            JudgeErrorKind::Transport
        };
        Self::new(kind, format!("HTTP request failed: {}", err))
    }
}
