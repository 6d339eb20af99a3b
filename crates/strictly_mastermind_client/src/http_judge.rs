//! HTTP implementation of the judge contract.

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use strictly_mastermind::{SessionId, Settings};
use tracing::{debug, error, info, instrument};

use crate::config::JudgeConfig;
use crate::error::{JudgeError, JudgeErrorKind};
use crate::judge::{
    EvaluateRequest, Evaluation, GenerateRequest, GenerateResponse, Judge, StartResponse,
};

/// Judge reached over HTTP with JSON bodies.
#[derive(Debug, Clone)]
pub struct HttpJudge {
    config: JudgeConfig,
    client: reqwest::Client,
}

impl HttpJudge {
    /// Creates a client for the judge described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`JudgeError`] if the HTTP client cannot be built.
    #[instrument(skip(config), fields(base_url = %config.base_url()))]
    pub fn new(config: JudgeConfig) -> Result<Self, JudgeError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| {
                JudgeError::new(
                    JudgeErrorKind::Transport,
                    format!("Failed to build HTTP client: {}", e),
                )
            })?;
        info!("Created HTTP judge client");
        Ok(Self { config, client })
    }

    /// Configuration this client was built with.
    pub fn config(&self) -> &JudgeConfig {
        &self.config
    }

    /// POSTs `body` (if any) to `path` and decodes the JSON answer.
    #[instrument(skip(self, body))]
    async fn post<B, R>(&self, path: &str, body: Option<&B>) -> Result<R, JudgeError>
    where
        B: Serialize + Sync + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.config.url(path);
        debug!(url = %url, "Sending judge request");

        let mut request = self.client.post(&url);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await?;

        let status = response.status();
        let text = response.text().await?;
        debug!(status = %status, body = %text, "Judge response");

        if !status.is_success() {
            error!(status = %status, url = %url, "Judge returned an error status");
            return Err(JudgeError::new(
                JudgeErrorKind::Status,
                format!("Judge returned {} for {}: {}", status, url, text),
            ));
        }

        serde_json::from_str(&text).map_err(|e| {
            JudgeError::new(
                JudgeErrorKind::Decode,
                format!("Unexpected judge response from {}: {} ({})", url, text, e),
            )
        })
    }
}

#[async_trait]
impl Judge for HttpJudge {
    #[instrument(skip(self))]
    async fn start(&self) -> Result<SessionId, JudgeError> {
        let response: StartResponse = self
            .post::<(), _>(self.config.endpoints().start(), None)
            .await?;
        info!(session_id = %response.session, "Judge session allocated");
        Ok(response.session)
    }

    #[instrument(skip(self), fields(session_id = %session))]
    async fn generate(&self, session: &SessionId, settings: &Settings) -> Result<(), JudgeError> {
        let request = GenerateRequest::for_settings(session.clone(), settings);
        let response: GenerateResponse = self
            .post(self.config.endpoints().generate(), Some(&request))
            .await?;
        if !response.success {
            return Err(JudgeError::new(
                JudgeErrorKind::Rejected,
                "Failed to generate board",
            ));
        }
        info!("Secret generated");
        Ok(())
    }

    #[instrument(skip(self), fields(session_id = %session))]
    async fn evaluate(&self, session: &SessionId, board: &str) -> Result<Evaluation, JudgeError> {
        let request = EvaluateRequest::new(session.clone(), board.to_string());
        let evaluation: Evaluation = self
            .post(self.config.endpoints().evaluate(), Some(&request))
            .await?;
        debug!(
            blacks = evaluation.blacks,
            whites = evaluation.whites,
            disclosed = evaluation.solution.is_some(),
            "Guess evaluated"
        );
        Ok(evaluation)
    }
}
