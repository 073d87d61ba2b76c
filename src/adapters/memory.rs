//! In-memory storage adapter
//!
//! Stores analyses in a mutex-guarded map keyed by analysis ID. Contents live
//! for the lifetime of the process; a restart starts empty.

use crate::domain::TranscriptAnalysis;
use crate::error::Result;
use crate::ports::storage::StoragePort;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory storage implementation
#[derive(Default)]
pub struct InMemoryStorage {
    analyses: Mutex<HashMap<String, TranscriptAnalysis>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StoragePort for InMemoryStorage {
    async fn save(&self, analysis: &TranscriptAnalysis) -> Result<()> {
        let mut analyses = self.analyses.lock().unwrap();
        analyses.insert(analysis.id.clone(), analysis.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<TranscriptAnalysis>> {
        let analyses = self.analyses.lock().unwrap();
        Ok(analyses.get(id).cloned())
    }
}
