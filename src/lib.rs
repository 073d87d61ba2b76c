//! Transcript analysis API library
//!
//! Accepts meeting and call transcripts over HTTP and produces an
//! LLM-generated summary with recommended action items. Each result is
//! stored for later retrieval by ID.
//!
//! The crate follows a ports-and-adapters layout: `ports` holds the LLM and
//! storage contracts with implementations under `adapters`, while `services`
//! orchestrates the analysis workflow that `api` exposes over HTTP.

pub mod adapters;
pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use api::{build_router, AppState};
pub use config::AppConfig;
pub use error::{AppError, Result};
