//! OpenAI LLM service adapter
//!
//! Implements the LlmServicePort against OpenAI's chat completions API.
//! Uses structured output (a strict JSON schema) so the model response is
//! constrained to the analysis payload shape.

use crate::error::{AppError, Result};
use crate::ports::llm::{GeneratedAnalysis, LlmServicePort};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;

const OPENAI_API_BASE: &str = "https://api.openai.com/v1";

/// OpenAI service implementation
pub struct OpenAIService {
    client: Client,
    api_key: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: String,
    json_schema: JsonSchemaFormat,
}

#[derive(Debug, Serialize)]
struct JsonSchemaFormat {
    name: String,
    strict: bool,
    schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

impl ResponseFormat {
    /// Structured-output format pinning the `GeneratedAnalysis` shape
    fn analysis() -> Self {
        Self {
            format_type: "json_schema".to_string(),
            json_schema: JsonSchemaFormat {
                name: "transcript_analysis".to_string(),
                strict: true,
                schema: json!({
                    "type": "object",
                    "properties": {
                        "summary": {
                            "type": "string",
                            "description": "A brief, insightful summary of the transcript"
                        },
                        "action_items": {
                            "type": "array",
                            "items": { "type": "string" },
                            "description": "Recommended next actions based on the transcript"
                        }
                    },
                    "required": ["summary", "action_items"],
                    "additionalProperties": false
                }),
            },
        }
    }
}

/// Parse the completion message content into the analysis payload
fn parse_payload(content: &str) -> Result<GeneratedAnalysis> {
    serde_json::from_str(content).map_err(|e| {
        AppError::LlmResponse(format!("OpenAI returned unparseable analysis content: {}", e))
    })
}

impl OpenAIService {
    /// Create a new OpenAI service with the given API key and model
    ///
    /// The timeout is the per-call deadline for completion requests.
    pub fn new(api_key: String, model: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_key,
            model,
        }
    }
}

#[async_trait]
impl LlmServicePort for OpenAIService {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<GeneratedAnalysis> {
        let request_body = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system_prompt.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user_prompt.to_string(),
                },
            ],
            response_format: ResponseFormat::analysis(),
        };

        log::info!(
            "Calling OpenAI chat completion with model: {}",
            self.model
        );

        let response = self
            .client
            .post(format!("{}/chat/completions", OPENAI_API_BASE))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                AppError::LlmConnection(format!("Failed to connect to OpenAI API: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(match status {
                StatusCode::UNAUTHORIZED => AppError::LlmAuthentication(format!(
                    "OpenAI authentication failed, check your API key: {}",
                    error_text
                )),
                StatusCode::TOO_MANY_REQUESTS => AppError::LlmRateLimit(format!(
                    "OpenAI rate limit exceeded: {}",
                    error_text
                )),
                _ => AppError::LlmResponse(format!(
                    "OpenAI API error ({}): {}",
                    status, error_text
                )),
            });
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            AppError::LlmResponse(format!("Failed to parse completion response: {}", e))
        })?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| {
                AppError::LlmResponse("OpenAI returned no completion choices".to_string())
            })?;

        let analysis = parse_payload(&content)?;

        log::info!(
            "OpenAI completion successful: summary of {} characters, {} action items",
            analysis.summary.len(),
            analysis.action_items.len()
        );

        Ok(analysis)
    }

    fn provider_name(&self) -> &str {
        "openai"
    }
}
