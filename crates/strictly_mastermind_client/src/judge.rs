//! Judging-service contract.
//!
//! The judge owns the secret and computes feedback. The client only ever
//! sees three request/response pairs, all JSON:
//!
//! - `start` → `{ session }`
//! - `generate { session, colors, pegs, dups }` → `{ success }`
//! - `evaluate { session, board }` → `{ blacks, whites, solution? }`

use async_trait::async_trait;
use derive_new::new;
use serde::{Deserialize, Serialize};
use strictly_mastermind::{SessionId, Settings};

use crate::error::JudgeError;

/// Response to `start`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartResponse {
    /// Newly allocated session.
    pub session: SessionId,
}

/// Body of `generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct GenerateRequest {
    /// Session to create the secret for.
    pub session: SessionId,
    /// Alphabet size.
    pub colors: u8,
    /// Code length.
    pub pegs: u8,
    /// `1` if the secret may repeat colors, `0` otherwise.
    pub dups: u8,
}

impl GenerateRequest {
    /// Builds the request for `settings`.
    pub fn for_settings(session: SessionId, settings: &Settings) -> Self {
        Self::new(
            session,
            settings.alphabet_size(),
            settings.code_length(),
            u8::from(settings.allow_duplicates()),
        )
    }
}

/// Response to `generate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Whether the secret was created.
    pub success: bool,
}

/// Body of `evaluate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct EvaluateRequest {
    /// Session the guess belongs to.
    pub session: SessionId,
    /// One uppercase letter per peg, left to right.
    pub board: String,
}

/// Response to `evaluate`.
///
/// Counts are unchecked here; the controller validates them against the
/// code length before they reach the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct Evaluation {
    /// Exact matches.
    pub blacks: u32,
    /// Color-only matches.
    pub whites: u32,
    /// The secret, disclosed at least when the game is lost.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution: Option<String>,
}

/// The external judge, seen as request/response operations.
///
/// Each call either succeeds or fails as a whole. Implementations must not
/// retry `evaluate` on their own: a retried guess could be counted twice.
#[async_trait]
pub trait Judge: Send + Sync {
    /// Allocates a new session.
    async fn start(&self) -> Result<SessionId, JudgeError>;

    /// Creates the hidden secret for `session` under `settings`.
    ///
    /// A `success: false` answer is reported as an error.
    async fn generate(&self, session: &SessionId, settings: &Settings) -> Result<(), JudgeError>;

    /// Judges one guess.
    async fn evaluate(&self, session: &SessionId, board: &str) -> Result<Evaluation, JudgeError>;
}
