//! Transcript analysis API server
//!
//! Wires the HTTP surface to the OpenAI-backed analysis service with
//! in-memory storage. Configuration comes from the environment; a missing
//! LLM credential or model name aborts startup.

use anyhow::Context;
use env_logger::Env;
use scribe_api::adapters::{InMemoryStorage, OpenAIService};
use scribe_api::api::{build_router, AppState};
use scribe_api::config::AppConfig;
use scribe_api::ports::llm::LlmServicePort;
use scribe_api::services::TranscriptAnalysisService;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    log::info!(
        "Starting transcript analysis API v{}",
        env!("CARGO_PKG_VERSION")
    );

    // Fail fast on incomplete configuration
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Configuration error: {}", e);
            return Err(e.into());
        }
    };

    let llm = Arc::new(OpenAIService::new(
        config.openai_api_key.clone(),
        config.openai_model.clone(),
        config.llm_timeout,
    ));
    log::info!(
        "LLM provider: {} (model: {})",
        llm.provider_name(),
        config.openai_model
    );

    let storage = Arc::new(InMemoryStorage::new());
    let service = Arc::new(TranscriptAnalysisService::new(llm, storage));
    let app = build_router(AppState::new(service));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    log::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
