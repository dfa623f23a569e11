//! Audit records for generation calls.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationAuditEntry {
    pub id: Uuid,
    pub model: String,
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    /// SHA-256 of the raw response text; empty when no response arrived.
    pub output_hash: String,
    pub latency_ms: u64,
    /// "success" or an `LlmError::kind()` tag.
    pub outcome: String,
    pub called_at: chrono::DateTime<Utc>,
}

impl GenerationAuditEntry {
    pub fn new(
        model: impl Into<String>,
        prompt_tokens: u32,
        completion_tokens: u32,
        output: Option<&str>,
        latency_ms: u64,
        outcome: impl Into<String>,
    ) -> Self {
        let output_hash = output
            .map(|text| {
                let mut hasher = Sha256::new();
                hasher.update(text.as_bytes());
                format!("{:x}", hasher.finalize())
            })
            .unwrap_or_default();

        Self {
            id: Uuid::new_v4(),
            model: model.into(),
            prompt_tokens,
            completion_tokens,
            output_hash,
            latency_ms,
            outcome: outcome.into(),
            called_at: Utc::now(),
        }
    }

    pub fn succeeded(&self) -> bool {
        self.outcome == "success"
    }

    pub fn log(&self) {
        if self.succeeded() {
            tracing::info!(
                audit_id = %self.id,
                model = %self.model,
                prompt_tokens = self.prompt_tokens,
                completion_tokens = self.completion_tokens,
                latency_ms = self.latency_ms,
                output_hash = %self.output_hash,
                "generation call completed"
            );
        } else {
            tracing::warn!(
                audit_id = %self.id,
                model = %self.model,
                latency_ms = self.latency_ms,
                outcome = %self.outcome,
                "generation call failed"
            );
        }
    }
}
