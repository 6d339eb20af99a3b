//! Strictly Mastermind client - plays against a remote judge.
//!
//! The judge holds the secret and scores each guess; this crate starts
//! sessions, persists the player's settings, and drives one game at a time.
//!
//! # Architecture
//!
//! - **Judge**: the [`Judge`] contract and its HTTP implementation [`HttpJudge`]
//! - **Store**: [`SettingsStore`], settings as one JSON file
//! - **Lifecycle**: [`SessionLifecycle`], start then generate, all or nothing
//! - **Controller**: [`GameController`], the single dispatcher for player intents
//! - **Play**: a line-oriented terminal loop and its text rendering

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod controller;
mod error;
mod http_judge;
mod judge;
mod lifecycle;
pub mod play;
pub mod render;
mod store;

pub use config::{
    ClientConfig, ConfigError, JUDGE_URL_ENV, JudgeConfig, JudgeEndpoints, SETTINGS_PATH_ENV,
    TIMEOUT_ENV,
};
pub use controller::{GameController, PendingSubmission, PlayError, SubmissionOutcome};
pub use error::{JudgeError, JudgeErrorKind};
pub use http_judge::HttpJudge;
pub use judge::{
    EvaluateRequest, Evaluation, GenerateRequest, GenerateResponse, Judge, StartResponse,
};
pub use lifecycle::SessionLifecycle;
pub use store::{SettingsStore, StoreError};
