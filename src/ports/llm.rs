/// LLM service port trait
///
/// Defines the interface for Large Language Model completion services.
/// Implementations: OpenAI (others can be added without touching the
/// orchestration service).
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Structured analysis returned by a completion call
///
/// Deliberately a distinct shape from the stored `TranscriptAnalysis` so the
/// model-call contract stays decoupled from the returned record (the service
/// adds the generated id).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneratedAnalysis {
    pub summary: String,
    pub action_items: Vec<String>,
}

/// Port trait for LLM completion services
///
/// The single async method serves both call modes the service needs:
/// awaited inline for a one-off analysis, or dispatched from many
/// concurrently scheduled futures during batch fan-out. Every adapter
/// therefore supports concurrent use by construction.
#[async_trait]
pub trait LlmServicePort: Send + Sync {
    /// Run one completion call and return the structured analysis
    ///
    /// The adapter is responsible for constraining the model output to the
    /// `GeneratedAnalysis` shape.
    async fn complete(&self, system_prompt: &str, user_prompt: &str)
        -> Result<GeneratedAnalysis>;

    /// Get the provider name
    fn provider_name(&self) -> &str;
}
