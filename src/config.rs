//! Environment-backed application configuration
//!
//! The LLM credential and model are required at process start; a missing or
//! empty value is a fatal startup condition, never a per-request error.

use std::env;
use std::time::Duration;

use crate::error::{AppError, Result};

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";
const DEFAULT_LLM_TIMEOUT_SECS: u64 = 120;

/// Configuration consumed by the core, resolved once at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// OpenAI API key (`OPENAI_API_KEY`)
    pub openai_api_key: String,
    /// Model identifier, e.g. "gpt-4o-2024-08-06" (`OPENAI_MODEL`)
    pub openai_model: String,
    /// Listen address for the HTTP server (`BIND_ADDR`)
    pub bind_addr: String,
    /// Per-call deadline for LLM requests (`LLM_TIMEOUT_SECS`)
    pub llm_timeout: Duration,
}

impl AppConfig {
    /// Load configuration from the environment
    pub fn from_env() -> Result<Self> {
        let openai_api_key = require_var("OPENAI_API_KEY")?;
        let openai_model = require_var("OPENAI_MODEL")?;

        let bind_addr =
            env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        let llm_timeout_secs = match env::var("LLM_TIMEOUT_SECS") {
            Ok(raw) => raw.parse::<u64>().map_err(|_| {
                AppError::Config(format!(
                    "LLM_TIMEOUT_SECS must be a whole number of seconds, got '{}'",
                    raw
                ))
            })?,
            Err(_) => DEFAULT_LLM_TIMEOUT_SECS,
        };

        Ok(Self {
            openai_api_key,
            openai_model,
            bind_addr,
            llm_timeout: Duration::from_secs(llm_timeout_secs),
        })
    }
}

/// Read a required variable, treating an empty value as missing
fn require_var(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(AppError::Config(format!("{} must be set", name))),
    }
}
