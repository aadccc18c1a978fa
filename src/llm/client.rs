use futures::future::BoxFuture;
use reqwest::StatusCode;

use crate::error::{GatewayError, Result};

use super::config::GatewayConfig;
use super::wire::{GenerateContentRequest, GenerateContentResponse};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
const API_KEY_HEADER: &str = "x-goog-api-key";
const ERROR_SNIPPET_CHARS: usize = 400;

/// A single-shot content generation capability.
///
/// Implementations make exactly one call per invocation: no retries, no caching.
pub trait GenerationService: Send + Sync {
    fn generate<'a>(
        &'a self,
        model: &'a str,
        request: &'a GenerateContentRequest,
    ) -> BoxFuture<'a, Result<GenerateContentResponse>>;
}

#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    config: GatewayConfig,
}

impl GeminiClient {
    pub fn new(config: GatewayConfig) -> Self {
        Self::with_http_client(config, reqwest::Client::new())
    }

    pub fn with_http_client(config: GatewayConfig, http: reqwest::Client) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Checks that the configured key is accepted by listing the available models.
    pub async fn healthcheck(&self) -> Result<()> {
        let url = format!("{}/models", self.config.base_url);
        tracing::debug!(%url, "validating API key");

        let response = self
            .http
            .get(url)
            .header(API_KEY_HEADER, self.config.api_key())
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(api_error(status, &body));
        }
        Ok(())
    }

    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let url = format!("{}/models/{}:generateContent", self.config.base_url, model);
        tracing::debug!(model, "sending generateContent request");

        let response = self
            .http
            .post(url)
            .header(API_KEY_HEADER, self.config.api_key())
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .json(request)
            .send()
            .await?;

        // Read as text first so error bodies are kept even when they are not JSON
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(api_error(status, &body));
        }

        let parsed: GenerateContentResponse =
            serde_json::from_str(&body).map_err(GatewayError::MalformedResponse)?;

        if let Some(reason) = parsed.block_reason() {
            tracing::warn!(model, reason, "prompt was blocked by the generation service");
        }

        Ok(parsed)
    }
}

impl GenerationService for GeminiClient {
    fn generate<'a>(
        &'a self,
        model: &'a str,
        request: &'a GenerateContentRequest,
    ) -> BoxFuture<'a, Result<GenerateContentResponse>> {
        Box::pin(self.generate_content(model, request))
    }
}

fn api_error(status: StatusCode, body: &str) -> GatewayError {
    GatewayError::Api {
        status: status.as_u16(),
        message: extract_error_message(body),
    }
}

// Prefers { "error": { "message": ... } } or { "message": ... }, otherwise a body snippet
fn extract_error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        let message = value
            .get("error")
            .and_then(|error| error.get("message"))
            .or_else(|| value.get("message"))
            .and_then(|message| message.as_str());
        if let Some(message) = message {
            return message.to_string();
        }
    }

    let trimmed = body.trim();
    if trimmed.chars().count() > ERROR_SNIPPET_CHARS {
        let snippet: String = trimmed.chars().take(ERROR_SNIPPET_CHARS).collect();
        format!("{snippet}...")
    } else {
        trimmed.to_string()
    }
}
