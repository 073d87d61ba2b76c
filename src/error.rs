/// Error types for the transcript analysis API
///
/// Uses thiserror for ergonomic error handling with proper Display implementations.
use thiserror::Error;

/// Main error type for the application
///
/// LLM failures carry their own variants so the HTTP layer can map
/// connection and rate-limit conditions to distinct status codes.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("LLM connection error: {0}")]
    LlmConnection(String),

    #[error("LLM rate limit exceeded: {0}")]
    LlmRateLimit(String),

    #[error("LLM authentication error: {0}")]
    LlmAuthentication(String),

    #[error("LLM response error: {0}")]
    LlmResponse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;
