//! HTTP API surface
//!
//! Exposes the analysis workflow over HTTP: transcripts go in, stored
//! analyses come back out by ID. Domain errors map to HTTP responses here
//! so handlers can bail with `?`.

use crate::error::AppError;
use crate::services::TranscriptAnalysisService;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use std::sync::Arc;

pub mod handlers;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Analysis orchestration service
    pub service: Arc<TranscriptAnalysisService>,
}

impl AppState {
    /// Create new application state
    pub fn new(service: Arc<TranscriptAnalysisService>) -> Self {
        Self { service }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/analyze",
            get(handlers::analyze_transcript_get).post(handlers::analyze_transcript),
        )
        .route("/analyze/batch", post(handlers::analyze_batch))
        .route("/analysis/:id", get(handlers::get_analysis))
        .with_state(state)
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::InvalidInput(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::LlmConnection(msg) => {
                log::error!("LLM connection error: {}", msg);
                (
                    StatusCode::BAD_GATEWAY,
                    "Failed to connect to analysis service. Please try again.".to_string(),
                )
            }
            AppError::LlmRateLimit(msg) => {
                log::error!("LLM rate limit exceeded: {}", msg);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Analysis service temporarily unavailable. Please try again later."
                        .to_string(),
                )
            }
            AppError::LlmAuthentication(msg) | AppError::LlmResponse(msg) => {
                log::error!("LLM service error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Analysis service error. Please try again.".to_string(),
                )
            }
            AppError::Config(msg) => {
                log::error!("Configuration error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error.".to_string(),
                )
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
