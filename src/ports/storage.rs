/// Storage port trait
///
/// Defines the interface for analysis persistence.
/// Implementation: in-memory adapter (a database adapter can be swapped in
/// without touching the orchestration service).
use crate::domain::models::TranscriptAnalysis;
use crate::error::Result;
use async_trait::async_trait;

/// Port trait for analysis storage
///
/// There is no update or delete: records are immutable and live for the
/// process lifetime. Looking up an unknown id yields `Ok(None)`, never an
/// error.
#[async_trait]
pub trait StoragePort: Send + Sync {
    /// Persist an analysis record
    async fn save(&self, analysis: &TranscriptAnalysis) -> Result<()>;

    /// Get an analysis record by id
    async fn get_by_id(&self, id: &str) -> Result<Option<TranscriptAnalysis>>;
}
