//! Transcript analysis orchestration service
//!
//! Coordinates the LLM and storage ports: each transcript becomes a prompt
//! pair for the LLM, and the structured result is persisted under a fresh
//! ID before it is returned.

use crate::domain::{PromptTemplates, TranscriptAnalysis};
use crate::error::Result;
use crate::ports::llm::LlmServicePort;
use crate::ports::storage::StoragePort;
use futures_util::future::try_join_all;
use std::sync::Arc;
use uuid::Uuid;

/// Orchestrates transcript analysis over the LLM and storage ports
pub struct TranscriptAnalysisService {
    llm: Arc<dyn LlmServicePort>,
    storage: Arc<dyn StoragePort>,
}

impl TranscriptAnalysisService {
    pub fn new(llm: Arc<dyn LlmServicePort>, storage: Arc<dyn StoragePort>) -> Self {
        Self { llm, storage }
    }

    /// Analyze a single transcript and persist the result
    pub async fn analyze(&self, transcript: &str) -> Result<TranscriptAnalysis> {
        log::info!(
            "Analyzing transcript of {} characters with provider: {}",
            transcript.len(),
            self.llm.provider_name()
        );

        // Render the prompts for this transcript
        let system_prompt = PromptTemplates::system();
        let user_prompt = PromptTemplates::user().replace("{transcript}", transcript);

        let generated = self.llm.complete(system_prompt, &user_prompt).await?;

        // Assign an ID and persist before returning
        let analysis = TranscriptAnalysis::new(
            Uuid::new_v4().to_string(),
            generated.summary,
            generated.action_items,
        );
        self.storage.save(&analysis).await?;

        log::info!("Stored analysis {}", analysis.id);

        Ok(analysis)
    }

    /// Analyze a batch of transcripts concurrently
    ///
    /// All transcripts are analyzed at once and the results come back in
    /// input order. If any analysis fails the whole batch fails; analyses
    /// still in flight are dropped.
    pub async fn analyze_batch(
        &self,
        transcripts: &[String],
    ) -> Result<Vec<TranscriptAnalysis>> {
        if transcripts.is_empty() {
            return Ok(Vec::new());
        }

        log::info!("Analyzing batch of {} transcripts", transcripts.len());

        let analyses = try_join_all(
            transcripts
                .iter()
                .map(|transcript| self.analyze(transcript)),
        )
        .await?;

        log::info!("Batch analysis complete: {} results", analyses.len());

        Ok(analyses)
    }

    /// Look up a previously stored analysis by its ID
    pub async fn get_by_id(&self, id: &str) -> Result<Option<TranscriptAnalysis>> {
        self.storage.get_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::ports::llm::GeneratedAnalysis;
    use crate::ports::mocks::{MockLlmService, MockStorage};

    fn build_service(
        llm: MockLlmService,
    ) -> (TranscriptAnalysisService, Arc<MockLlmService>, MockStorage) {
        let llm = Arc::new(llm);
        let storage = MockStorage::new();
        let service =
            TranscriptAnalysisService::new(llm.clone(), Arc::new(storage.clone()));
        (service, llm, storage)
    }

    #[tokio::test]
    async fn test_analyze_returns_llm_payload() {
        let llm = MockLlmService::with_response(GeneratedAnalysis {
            summary: "S".to_string(),
            action_items: vec!["A1".to_string(), "A2".to_string()],
        });
        let (service, _, _) = build_service(llm);

        let analysis = service
            .analyze("Team meeting: ship by Friday.")
            .await
            .unwrap();

        assert_eq!(analysis.summary, "S");
        assert_eq!(analysis.action_items, vec!["A1", "A2"]);
        assert!(!analysis.id.is_empty());

        let retrieved = service.get_by_id(&analysis.id).await.unwrap();
        assert_eq!(retrieved, Some(analysis));
    }

    #[tokio::test]
    async fn test_analyze_assigns_unique_ids() {
        let (service, _, _) = build_service(MockLlmService::new());

        let first = service.analyze("First call notes").await.unwrap();
        let second = service.analyze("Second call notes").await.unwrap();

        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_analyze_renders_prompts_with_transcript() {
        let (service, llm, _) = build_service(MockLlmService::new());

        service
            .analyze("Budget review for Q3 marketing spend")
            .await
            .unwrap();

        let calls = llm.calls();
        assert_eq!(calls.len(), 1);
        let (system_prompt, user_prompt) = &calls[0];
        assert_eq!(system_prompt, PromptTemplates::system());
        assert!(user_prompt.contains("Budget review for Q3 marketing spend"));
        assert!(!user_prompt.contains("{transcript}"));
    }

    #[tokio::test]
    async fn test_analyze_persists_before_returning() {
        let (service, _, storage) = build_service(MockLlmService::new());

        let analysis = service.analyze("Standup notes").await.unwrap();

        let saved = storage.save_calls();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0], analysis);
    }

    #[tokio::test]
    async fn test_analyzed_transcript_is_retrievable() {
        let (service, _, _) = build_service(MockLlmService::new());

        let analysis = service.analyze("Retro notes").await.unwrap();
        let retrieved = service.get_by_id(&analysis.id).await.unwrap();

        assert_eq!(retrieved, Some(analysis));
    }

    #[tokio::test]
    async fn test_get_by_id_unknown_returns_none() {
        let (service, _, _) = build_service(MockLlmService::new());

        let retrieved = service.get_by_id("no-such-id").await.unwrap();

        assert_eq!(retrieved, None);
    }

    #[tokio::test]
    async fn test_analyze_propagates_llm_failure_without_saving() {
        let llm = MockLlmService::failing(|| {
            AppError::LlmConnection("connection refused".to_string())
        });
        let (service, _, storage) = build_service(llm);

        let result = service.analyze("Sync notes").await;

        assert!(matches!(result, Err(AppError::LlmConnection(_))));
        assert!(storage.save_calls().is_empty());
    }

    #[tokio::test]
    async fn test_batch_preserves_input_order() {
        let (service, _, storage) = build_service(MockLlmService::echoing());

        let transcripts = vec![
            "transcript-0".to_string(),
            "transcript-1".to_string(),
            "transcript-2".to_string(),
        ];
        let analyses = service.analyze_batch(&transcripts).await.unwrap();

        assert_eq!(analyses.len(), 3);
        for (i, analysis) in analyses.iter().enumerate() {
            assert!(analysis.summary.contains(&format!("transcript-{}", i)));
        }
        assert_eq!(storage.save_calls().len(), 3);
    }

    #[tokio::test]
    async fn test_batch_ids_are_unique() {
        let (service, _, _) = build_service(MockLlmService::new());

        let transcripts = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let analyses = service.analyze_batch(&transcripts).await.unwrap();

        let mut ids: Vec<_> = analyses.iter().map(|a| a.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[tokio::test]
    async fn test_batch_empty_input_skips_llm() {
        let (service, llm, _) = build_service(MockLlmService::new());

        let analyses = service.analyze_batch(&[]).await.unwrap();

        assert!(analyses.is_empty());
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_batch_fails_when_any_analysis_fails() {
        let llm = MockLlmService::failing(|| {
            AppError::LlmRateLimit("too many requests".to_string())
        });
        let (service, _, storage) = build_service(llm);

        let transcripts = vec!["a".to_string(), "b".to_string()];
        let result = service.analyze_batch(&transcripts).await;

        assert!(matches!(result, Err(AppError::LlmRateLimit(_))));
        assert!(storage.save_calls().is_empty());
    }
}
