use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur when calling the text-generation collaborator
#[derive(Debug, Error)]
pub enum TextGenError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Narrow contract for the text-generation collaborator
///
/// Prompt in, text out, fallible. Callers own the fallback policy; an
/// implementation only reports what happened.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, max_tokens: u32) -> Result<String, TextGenError>;
}

/// Cloudflare Workers AI REST client
///
/// The endpoint carries the account path; model invocations go to
/// `{endpoint}/ai/run/{model}`.
pub struct WorkersAiClient {
    endpoint: String,
    api_key: String,
    model: String,
    client: Client,
}

impl WorkersAiClient {
    pub fn new(endpoint: String, api_key: String, model: String, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            endpoint,
            api_key,
            model,
            client,
        }
    }
}

#[async_trait]
impl TextGenerator for WorkersAiClient {
    async fn generate(&self, prompt: &str, max_tokens: u32) -> Result<String, TextGenError> {
        let url = format!(
            "{}/ai/run/{}",
            self.endpoint.trim_end_matches('/'),
            self.model
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&serde_json::json!({ "prompt": prompt, "max_tokens": max_tokens }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(TextGenError::ApiError(format!(
                "Generation request failed: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        let text = json
            .get("result")
            .and_then(|r| r.get("response"))
            .and_then(|t| t.as_str())
            .ok_or_else(|| TextGenError::InvalidResponse("Missing result.response".into()))?;

        Ok(text.to_string())
    }
}
