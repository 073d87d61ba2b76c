//! Mock implementations for testing

use crate::domain::models::TranscriptAnalysis;
use crate::error::{AppError, Result};
use crate::ports::llm::{GeneratedAnalysis, LlmServicePort};
use crate::ports::storage::StoragePort;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// What the mock LLM returns for each completion call
enum MockBehavior {
    /// Always return the same payload
    Fixed(GeneratedAnalysis),
    /// Return the user prompt as the summary, so callers can assert which
    /// transcript produced which result
    Echo,
    /// Fail every call with a freshly constructed error
    Fail(fn() -> AppError),
}

/// Mock LLM implementation for testing
///
/// Records the prompts of every call and answers according to a configured
/// behavior.
pub struct MockLlmService {
    behavior: MockBehavior,
    calls: Mutex<Vec<(String, String)>>,
}

impl MockLlmService {
    /// Mock answering with a standard test payload
    pub fn new() -> Self {
        Self::with_response(GeneratedAnalysis {
            summary: "Test summary from LLM".to_string(),
            action_items: vec![
                "Action 1".to_string(),
                "Action 2".to_string(),
                "Action 3".to_string(),
            ],
        })
    }

    /// Mock answering with a custom payload
    pub fn with_response(response: GeneratedAnalysis) -> Self {
        Self {
            behavior: MockBehavior::Fixed(response),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Mock echoing the user prompt back as the summary
    pub fn echoing() -> Self {
        Self {
            behavior: MockBehavior::Echo,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Mock failing every call with the produced error
    pub fn failing(error: fn() -> AppError) -> Self {
        Self {
            behavior: MockBehavior::Fail(error),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Prompts of every completion call so far, in call order
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of completion calls so far
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Default for MockLlmService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LlmServicePort for MockLlmService {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<GeneratedAnalysis> {
        self.calls
            .lock()
            .unwrap()
            .push((system_prompt.to_string(), user_prompt.to_string()));

        match &self.behavior {
            MockBehavior::Fixed(response) => Ok(response.clone()),
            MockBehavior::Echo => Ok(GeneratedAnalysis {
                summary: user_prompt.to_string(),
                action_items: Vec::new(),
            }),
            MockBehavior::Fail(error) => Err(error()),
        }
    }

    fn provider_name(&self) -> &str {
        "mock"
    }
}

/// Mock storage implementation for testing
///
/// Stores records in memory and tracks every save call.
#[derive(Clone, Default)]
pub struct MockStorage {
    analyses: Arc<Mutex<HashMap<String, TranscriptAnalysis>>>,
    save_calls: Arc<Mutex<Vec<TranscriptAnalysis>>>,
}

impl MockStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every record passed to save, in call order
    pub fn save_calls(&self) -> Vec<TranscriptAnalysis> {
        self.save_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl StoragePort for MockStorage {
    async fn save(&self, analysis: &TranscriptAnalysis) -> Result<()> {
        self.analyses
            .lock()
            .unwrap()
            .insert(analysis.id.clone(), analysis.clone());
        self.save_calls.lock().unwrap().push(analysis.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<TranscriptAnalysis>> {
        Ok(self.analyses.lock().unwrap().get(id).cloned())
    }
}
