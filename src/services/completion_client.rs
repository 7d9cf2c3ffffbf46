// src/services/completion_client.rs
use reqwest::Client;
use serde::Deserialize;

use crate::{
    config::Config,
    error::{AppError, Result},
    services::assistant::build_request,
};

/// Shape of a chat-completions reply. Every field is optional so a missing
/// piece surfaces as [`AppError::UpstreamInvalidResponse`] rather than a parse panic.
#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Option<Vec<Choice>>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl CompletionResponse {
    pub fn parse(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body).map_err(|_| AppError::UpstreamInvalidResponse)
    }

    /// Content of `choices[0].message`.
    pub fn into_reply(self) -> Result<String> {
        self.choices
            .and_then(|choices| choices.into_iter().next())
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .ok_or(AppError::UpstreamInvalidResponse)
    }
}

#[derive(Clone, Debug)]
pub struct CompletionClient {
    http: Client,
    config: Config,
}

impl CompletionClient {
    pub fn new(config: Config) -> Self {
        Self { http: Client::new(), config }
    }

    /// Sends one chat-completions request for `user_msg` and returns the first choice.
    ///
    /// A non-success status is only logged: an error body has no
    /// `choices` and is reported as an invalid response.
    pub async fn complete(&self, user_msg: &str) -> Result<String> {
        let request = build_request(&self.config.model, self.config.max_tokens, user_msg);

        let response = self
            .http
            .post(self.config.completions_url())
            .bearer_auth(self.config.api_key.expose())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            tracing::warn!(%status, "completion provider returned an error status");
        }

        CompletionResponse::parse(&body)?.into_reply()
    }
}
