//! Scripted `GenerationBackend` that records every call.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use bioventure_common::AiGeneratedPlan;
use bioventure_llm::{GenerationBackend, GenerationOptions, GenerationResponse, LlmError};
use tokio::sync::Semaphore;

#[derive(Debug, Clone)]
pub enum FakeReply {
    /// Raw response text, returned as-is.
    Text(String),
    ApiError { status: u16, message: String },
    Empty,
}

impl FakeReply {
    pub fn plan(plan: &AiGeneratedPlan) -> Self {
        FakeReply::Text(serde_json::to_string(plan).expect("fixture plan serializes"))
    }

    fn into_result(self, model: &str) -> Result<GenerationResponse, LlmError> {
        match self {
            FakeReply::Text(text) => Ok(GenerationResponse {
                text,
                model: model.to_string(),
                prompt_tokens: 100,
                completion_tokens: 200,
            }),
            FakeReply::ApiError { status, message } => Err(LlmError::ApiError { status, message }),
            FakeReply::Empty => Err(LlmError::EmptyResponse),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub prompt: String,
    pub schema: serde_json::Value,
    pub options: GenerationOptions,
}

/// Holds gated calls until the test releases them.
#[derive(Clone)]
pub struct Gate(Arc<Semaphore>);

impl Gate {
    /// Let one pending (or future) call return.
    pub fn release(&self) {
        self.0.add_permits(1);
    }
}

pub struct FakeBackend {
    model: String,
    script: Mutex<VecDeque<FakeReply>>,
    fallback: FakeReply,
    calls: Mutex<Vec<RecordedCall>>,
    gate: Option<Arc<Semaphore>>,
}

impl FakeBackend {
    /// Every call gets `reply` unless something was queued with `then`.
    pub fn replying(reply: FakeReply) -> Self {
        Self {
            model: "fake-gemini".to_string(),
            script: Mutex::new(VecDeque::new()),
            fallback: reply,
            calls: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    pub fn with_plan(plan: &AiGeneratedPlan) -> Self {
        Self::replying(FakeReply::plan(plan))
    }

    /// Queue a one-off reply ahead of the fallback.
    pub fn then(self, reply: FakeReply) -> Self {
        lock(&self.script).push_back(reply);
        self
    }

    /// Block each call until `Gate::release` is called once for it.
    pub fn gated(mut self) -> (Self, Gate) {
        let sem = Arc::new(Semaphore::new(0));
        self.gate = Some(sem.clone());
        (self, Gate(sem))
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        lock(&self.calls).clone()
    }

    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Yield until at least `n` calls have been recorded.
    pub async fn wait_for_calls(&self, n: usize) {
        while self.call_count() < n {
            tokio::task::yield_now().await;
        }
    }
}

fn lock<T>(m: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

#[async_trait]
impl GenerationBackend for FakeBackend {
    async fn generate(
        &self,
        prompt: &str,
        schema: &serde_json::Value,
        options: &GenerationOptions,
    ) -> Result<GenerationResponse, LlmError> {
        lock(&self.calls).push(RecordedCall {
            prompt: prompt.to_string(),
            schema: schema.clone(),
            options: options.clone(),
        });

        if let Some(gate) = &self.gate {
            gate.acquire().await.expect("gate semaphore closed").forget();
        }

        let reply = lock(&self.script).pop_front().unwrap_or_else(|| self.fallback.clone());
        reply.into_result(&self.model)
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}
