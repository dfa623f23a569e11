//! bioventure-llm: blueprint generation against a hosted language model.
//! Builds the prompt and response schema from a user context, sends them
//! through a `GenerationBackend`, and parses the structured plan.

pub mod backend;
pub mod prompt;
pub mod schema;
pub mod generator;
pub mod audit;

pub use backend::{GeminiBackend, GenerationBackend, GenerationOptions, GenerationResponse, LlmError};
pub use generator::PlanGenerator;
pub use prompt::PlanRequest;
