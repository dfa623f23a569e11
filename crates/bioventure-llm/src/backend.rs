//! Generation backend trait and the Google Gemini implementation.
//!
//! A backend takes a prompt plus a response schema and returns the raw text
//! of exactly one response. Parsing into a plan happens in `generator`.

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ── Error ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("No API credential configured for {0}")]
    MissingCredential(&'static str),
    #[error("API error [{status}]: {message}")]
    ApiError { status: u16, message: String },
    #[error("Generation service returned an empty response")]
    EmptyResponse,
    #[error("Response is not a valid plan: {0}")]
    MalformedResponse(#[source] serde_json::Error),
}

impl LlmError {
    /// Short machine-readable tag used in audit entries and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            LlmError::Http(_)              => "http_error",
            LlmError::MissingCredential(_) => "missing_credential",
            LlmError::ApiError { .. }      => "api_error",
            LlmError::EmptyResponse        => "empty_response",
            LlmError::MalformedResponse(_) => "malformed_response",
        }
    }
}

// ── Request / Response ────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationOptions {
    pub temperature: f32,
    /// Token budget for the model's internal reasoning; `None` leaves the
    /// service default.
    pub thinking_budget: Option<u32>,
    pub max_output_tokens: Option<u32>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            temperature: 0.75,
            thinking_budget: Some(2000),
            max_output_tokens: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub text: String,
    pub model: String,
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

// ── Trait ─────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait GenerationBackend: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        schema: &serde_json::Value,
        options: &GenerationOptions,
    ) -> Result<GenerationResponse, LlmError>;

    fn model_id(&self) -> &str;
}

async fn check_response_status(resp: reqwest::Response) -> Result<serde_json::Value, LlmError> {
    let status = resp.status().as_u16();
    let body: serde_json::Value = resp.json().await?;
    if status >= 400 {
        let msg = body["error"]["message"]
            .as_str()
            .or_else(|| body["message"].as_str())
            .unwrap_or("unknown API error")
            .to_string();
        return Err(LlmError::ApiError { status, message: msg });
    }
    Ok(body)
}

// ── Google Gemini ─────────────────────────────────────────────────────────────

pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-3-pro-preview";

pub struct GeminiBackend {
    pub model: String,
    pub base_url: String,
    api_key: SecretString,
    client: reqwest::Client,
}

impl GeminiBackend {
    /// Fails fast when the credential is blank; no request is ever attempted
    /// without one.
    pub fn new(api_key: SecretString, model: impl Into<String>) -> Result<Self, LlmError> {
        if api_key.expose_secret().trim().is_empty() {
            return Err(LlmError::MissingCredential("Gemini"));
        }
        Ok(Self {
            model: model.into(),
            base_url: GEMINI_BASE_URL.to_string(),
            api_key,
            client: reqwest::Client::new(),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, LlmError> {
        self.client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(self)
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

/// The `generateContent` request body: a single user turn constrained to
/// JSON output matching `schema`.
pub fn build_request_body(
    prompt: &str,
    schema: &serde_json::Value,
    options: &GenerationOptions,
) -> serde_json::Value {
    let mut generation_config = serde_json::json!({
        "responseMimeType": "application/json",
        "responseSchema":   schema,
        "temperature":      options.temperature,
    });
    if let Some(budget) = options.thinking_budget {
        generation_config["thinkingConfig"] = serde_json::json!({ "thinkingBudget": budget });
    }
    if let Some(max) = options.max_output_tokens {
        generation_config["maxOutputTokens"] = serde_json::json!(max);
    }

    serde_json::json!({
        "contents": [{
            "role": "user",
            "parts": [{ "text": prompt }]
        }],
        "generationConfig": generation_config,
    })
}

/// Concatenate the answer parts of the first candidate, skipping thought
/// summaries emitted by reasoning models.
fn candidate_text(json: &serde_json::Value) -> String {
    json["candidates"][0]["content"]["parts"]
        .as_array()
        .map(|parts| {
            parts
                .iter()
                .filter(|p| !p["thought"].as_bool().unwrap_or(false))
                .filter_map(|p| p["text"].as_str())
                .collect::<String>()
        })
        .unwrap_or_default()
}

#[async_trait]
impl GenerationBackend for GeminiBackend {
    async fn generate(
        &self,
        prompt: &str,
        schema: &serde_json::Value,
        options: &GenerationOptions,
    ) -> Result<GenerationResponse, LlmError> {
        let body = build_request_body(prompt, schema, options);

        tracing::debug!(model = %self.model, prompt_chars = prompt.len(), "sending generateContent request");

        let resp = self.client
            .post(self.endpoint())
            .header("x-goog-api-key", self.api_key.expose_secret())
            .json(&body)
            .send()
            .await?;
        let json = check_response_status(resp).await?;

        let text = candidate_text(&json);
        if text.trim().is_empty() {
            if let Some(reason) = json["promptFeedback"]["blockReason"].as_str() {
                tracing::warn!(reason, "Gemini blocked the prompt");
            }
            return Err(LlmError::EmptyResponse);
        }

        Ok(GenerationResponse {
            text,
            model: json["modelVersion"].as_str().unwrap_or(&self.model).to_string(),
            prompt_tokens:     json["usageMetadata"]["promptTokenCount"].as_u64().unwrap_or(0) as u32,
            completion_tokens: json["usageMetadata"]["candidatesTokenCount"].as_u64().unwrap_or(0) as u32,
        })
    }

    fn model_id(&self) -> &str { &self.model }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
