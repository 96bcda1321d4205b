//! Hosted text-generation client.

use std::future::Future;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use folio_config::ChatConfig;

use crate::error::ChatError;
use crate::http::check_response;

/// Anything that can turn a prompt into generated text.
pub trait CompletionClient {
    fn complete(&self, prompt: &str) -> impl Future<Output = Result<String, ChatError>> + Send;
}

#[derive(Debug, Serialize)]
struct GenerationRequest<'a> {
    inputs: &'a str,
    parameters: GenerationParameters,
}

#[derive(Debug, Serialize)]
struct GenerationParameters {
    max_length: u32,
    temperature: f32,
    do_sample: bool,
}

#[derive(Debug, Deserialize)]
struct Generation {
    #[serde(default)]
    generated_text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum GenerationResponse {
    Many(Vec<Generation>),
    One(Generation),
}

/// Pull `generated_text` out of a list-of-objects or single-object body.
///
/// # Errors
///
/// Returns [`ChatError::UnexpectedFormat`] for any other shape, or when the
/// text is missing or empty.
pub fn parse_generation(body: &str) -> Result<String, ChatError> {
    let parsed: GenerationResponse = serde_json::from_str(body)
        .map_err(|e| ChatError::UnexpectedFormat(e.to_string()))?;
    let generation = match parsed {
        GenerationResponse::Many(list) => list.into_iter().next(),
        GenerationResponse::One(single) => Some(single),
    };
    generation
        .and_then(|g| g.generated_text)
        .filter(|text| !text.is_empty())
        .ok_or_else(|| ChatError::UnexpectedFormat("missing generated_text".into()))
}

/// POSTs prompts to the configured inference endpoint.
#[derive(Debug, Clone)]
pub struct HostedCompletionClient {
    http: reqwest::Client,
    config: ChatConfig,
}

impl HostedCompletionClient {
    /// # Errors
    ///
    /// Returns [`ChatError::Http`] if the HTTP client cannot be built.
    pub fn new(config: ChatConfig) -> Result<Self, ChatError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("folio/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { http, config })
    }

    #[must_use]
    pub const fn config(&self) -> &ChatConfig {
        &self.config
    }
}

impl CompletionClient for HostedCompletionClient {
    async fn complete(&self, prompt: &str) -> Result<String, ChatError> {
        if !self.config.is_configured() {
            return Err(ChatError::NotConfigured);
        }
        let body = GenerationRequest {
            inputs: prompt,
            parameters: GenerationParameters {
                max_length: self.config.max_length,
                temperature: self.config.temperature,
                do_sample: self.config.do_sample,
            },
        };
        tracing::debug!(endpoint = %self.config.endpoint, "requesting completion");
        let resp = self
            .http
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.api_token)
            .json(&body)
            .send()
            .await?;
        let resp = check_response(resp).await?;
        let text = resp.text().await?;
        parse_generation(&text)
    }
}
