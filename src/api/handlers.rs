//! HTTP request handlers
//!
//! Request and response payloads live next to the handlers that use them.
//! Request bodies are validated here before the analysis service is invoked,
//! so a rejected request never reaches the LLM.

use crate::api::AppState;
use crate::domain::TranscriptAnalysis;
use crate::error::{AppError, Result};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

/// Maximum accepted transcript length in characters
const MAX_TRANSCRIPT_CHARS: usize = 100_000;

/// Maximum number of transcripts in one batch request
const MAX_BATCH_SIZE: usize = 10;

/// Request to analyze a single transcript
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub transcript: String,
}

impl AnalyzeRequest {
    fn validate(&self) -> Result<()> {
        if self.transcript.is_empty() {
            return Err(AppError::InvalidInput(
                "Transcript must not be empty".to_string(),
            ));
        }
        if self.transcript.chars().count() > MAX_TRANSCRIPT_CHARS {
            return Err(AppError::InvalidInput(
                "Transcript exceeds maximum length of 100,000 characters".to_string(),
            ));
        }
        Ok(())
    }
}

/// Query parameters for the GET analysis variant
///
/// Carries the transcript in the URL, so it is only suitable for short
/// transcripts. POST is the path for anything longer.
#[derive(Debug, Deserialize)]
pub struct AnalyzeQuery {
    pub transcript: String,
}

/// Request to analyze multiple transcripts concurrently
#[derive(Debug, Deserialize)]
pub struct BatchAnalyzeRequest {
    pub transcripts: Vec<String>,
}

impl BatchAnalyzeRequest {
    fn validate(&self) -> Result<()> {
        if self.transcripts.is_empty() {
            return Err(AppError::InvalidInput(
                "Batch must contain at least 1 transcript".to_string(),
            ));
        }
        if self.transcripts.len() > MAX_BATCH_SIZE {
            return Err(AppError::InvalidInput(format!(
                "Batch must contain at most {} transcripts",
                MAX_BATCH_SIZE
            )));
        }
        for (i, transcript) in self.transcripts.iter().enumerate() {
            if transcript.trim().is_empty() {
                return Err(AppError::InvalidInput(format!(
                    "Transcript at index {} must not be empty",
                    i
                )));
            }
            if transcript.chars().count() > MAX_TRANSCRIPT_CHARS {
                return Err(AppError::InvalidInput(format!(
                    "Transcript at index {} exceeds maximum length of 100,000 characters",
                    i
                )));
            }
        }
        Ok(())
    }
}

/// Response containing a stored analysis
#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub id: String,
    pub summary: String,
    pub action_items: Vec<String>,
}

impl From<TranscriptAnalysis> for AnalysisResponse {
    fn from(analysis: TranscriptAnalysis) -> Self {
        Self {
            id: analysis.id,
            summary: analysis.summary,
            action_items: analysis.action_items,
        }
    }
}

/// Response containing the results of a batch analysis
#[derive(Debug, Serialize)]
pub struct BatchAnalysisResponse {
    pub results: Vec<AnalysisResponse>,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// GET /health - service health check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

/// POST /analyze - analyze a single transcript
pub async fn analyze_transcript(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<(StatusCode, Json<AnalysisResponse>)> {
    request.validate()?;

    let analysis = state.service.analyze(&request.transcript).await?;

    Ok((StatusCode::CREATED, Json(analysis.into())))
}

/// GET /analyze - analyze a single transcript passed as a query parameter
pub async fn analyze_transcript_get(
    State(state): State<AppState>,
    Query(query): Query<AnalyzeQuery>,
) -> Result<(StatusCode, Json<AnalysisResponse>)> {
    if query.transcript.is_empty() {
        return Err(AppError::InvalidInput(
            "Transcript must not be empty".to_string(),
        ));
    }

    let analysis = state.service.analyze(&query.transcript).await?;

    Ok((StatusCode::CREATED, Json(analysis.into())))
}

/// POST /analyze/batch - analyze multiple transcripts concurrently
pub async fn analyze_batch(
    State(state): State<AppState>,
    Json(request): Json<BatchAnalyzeRequest>,
) -> Result<(StatusCode, Json<BatchAnalysisResponse>)> {
    request.validate()?;

    let analyses = state.service.analyze_batch(&request.transcripts).await?;

    Ok((
        StatusCode::CREATED,
        Json(BatchAnalysisResponse {
            results: analyses.into_iter().map(AnalysisResponse::from).collect(),
        }),
    ))
}

/// GET /analysis/:id - retrieve a stored analysis
pub async fn get_analysis(
    State(state): State<AppState>,
    Path(analysis_id): Path<String>,
) -> Result<Json<AnalysisResponse>> {
    let analysis = state
        .service
        .get_by_id(&analysis_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("Analysis with ID '{}' not found", analysis_id))
        })?;

    Ok(Json(analysis.into()))
}
