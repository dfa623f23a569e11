//! Plan generation client: sends one request and parses the returned plan.
//!
//! No caching and no retries: a failed call is surfaced to the caller and
//! retrying is left to the user.

use std::sync::Arc;
use std::time::Instant;

use bioventure_common::{AiGeneratedPlan, UserContext};

use crate::audit::GenerationAuditEntry;
use crate::backend::{GenerationBackend, GenerationOptions, LlmError};
use crate::prompt::PlanRequest;

pub struct PlanGenerator {
    backend: Arc<dyn GenerationBackend>,
    options: GenerationOptions,
}

impl PlanGenerator {
    pub fn new(backend: Arc<dyn GenerationBackend>, options: GenerationOptions) -> Self {
        Self { backend, options }
    }

    pub fn model_id(&self) -> &str {
        self.backend.model_id()
    }

    pub async fn generate(&self, ctx: &UserContext) -> Result<AiGeneratedPlan, LlmError> {
        let request = PlanRequest::from_context(ctx);
        let started = Instant::now();

        let result = self
            .backend
            .generate(&request.prompt, &request.schema, &self.options)
            .await;
        let latency_ms = started.elapsed().as_millis() as u64;

        let response = match result {
            Ok(r) => r,
            Err(e) => {
                GenerationAuditEntry::new(self.model_id(), 0, 0, None, latency_ms, e.kind()).log();
                return Err(e);
            }
        };

        let parsed = parse_plan(&response.text);
        let outcome = match &parsed {
            Ok(_)  => "success",
            Err(e) => e.kind(),
        };
        GenerationAuditEntry::new(
            &response.model,
            response.prompt_tokens,
            response.completion_tokens,
            Some(&response.text),
            latency_ms,
            outcome,
        )
        .log();

        parsed
    }
}

/// Parse the raw response text. The schema is enforced by the service;
/// locally we only require well-formed JSON of the right shape.
pub fn parse_plan(text: &str) -> Result<AiGeneratedPlan, LlmError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(LlmError::EmptyResponse);
    }
    serde_json::from_str(trimmed).map_err(LlmError::MalformedResponse)
}
