/// Domain models for the transcript analysis service
///
/// These models represent core business entities and are independent of any
/// transport, storage, or LLM-provider concerns.
use serde::{Deserialize, Serialize};

/// A completed transcript analysis
///
/// Immutable once created. The id is generated by the service, never
/// user-supplied, and identifies at most one record for the lifetime of
/// the process.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TranscriptAnalysis {
    pub id: String,
    pub summary: String,
    pub action_items: Vec<String>,
}

impl TranscriptAnalysis {
    /// Creates a new analysis record
    pub fn new(id: String, summary: String, action_items: Vec<String>) -> Self {
        Self {
            id,
            summary,
            action_items,
        }
    }
}
