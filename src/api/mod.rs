// Ollama API client

use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::models::AppConfig;

/// Instruction template sent to the model; the line prefix is appended
/// verbatim, without escaping.
const PROMPT_TEMPLATE: &str = "Continue the following code snippet exactly where it left off and return the remaining generated snippet only, maintaining the same style and indentation. Only return the code, without any explanations or markdown:";

#[derive(Debug, Error)]
pub enum FetchError {
    /// The backend could not be reached or answered with a failing status.
    #[error("completion backend unavailable: {0}")]
    BackendUnavailable(#[source] reqwest::Error),
    /// The backend answered, but the body lacks the generated text field.
    #[error("backend response is missing the generated text")]
    InvalidResponse,
}

#[derive(Debug, Serialize)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
}

#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    pub response: Option<String>,
    #[serde(default)]
    pub done: bool,
}

#[derive(Debug, Clone)]
pub struct CompletionClient {
    base_url: String,
    model: String,
    client: Client,
}

impl CompletionClient {
    pub fn new(base_url: String, model: String, request_timeout: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(request_timeout))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            base_url,
            model,
            client,
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Self::new(
            config.ollama_url.clone(),
            config.model.clone(),
            config.request_timeout,
        )
    }

    pub fn build_prompt(prefix_text: &str) -> String {
        format!("{PROMPT_TEMPLATE}\n\n{prefix_text}")
    }

    /// Ask the model to continue `prefix_text` and return the raw generated
    /// text. A single attempt, no retry; the next trigger starts fresh.
    pub async fn fetch(&self, prefix_text: &str) -> Result<String, FetchError> {
        let url = format!("{}/api/generate", self.base_url);

        let request = GenerateRequest {
            model: self.model.clone(),
            prompt: Self::build_prompt(prefix_text),
            stream: false,
        };

        debug!(prefix = prefix_text, "requesting completion");

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(FetchError::BackendUnavailable)?
            .error_for_status()
            .map_err(FetchError::BackendUnavailable)?;

        let body = response
            .json::<GenerateResponse>()
            .await
            .map_err(|_| FetchError::InvalidResponse)?;

        let raw = body.response.ok_or(FetchError::InvalidResponse)?;
        debug!(raw_len = raw.len(), "received completion");

        Ok(raw)
    }

    pub async fn health_check(&self) -> bool {
        let url = format!("{}/api/tags", self.base_url);

        self.client
            .get(&url)
            .send()
            .await
            .is_ok_and(|response| response.status().is_success())
    }
}
