//! Generation client error types
//!
//! Errors that can occur while obtaining a research report from the model.

use thiserror::Error;

/// Errors returned by a generation client
///
/// The orchestrator never shows these to the user. It logs them and collapses
/// every variant into one generic failure message.
#[derive(Error, Debug)]
pub enum ResearchError {
    /// A required credential or setting is missing or invalid
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The remote call could not complete (network failure, timeout, HTTP error)
    #[error("Transport error: {0}")]
    Transport(String),

    /// The response text did not conform to the declared schema
    #[error("Schema violation: {0}")]
    SchemaViolation(String),
}

impl From<reqwest::Error> for ResearchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ResearchError::Transport(format!("Request to Gemini API timed out: {}", e))
        } else {
            ResearchError::Transport(format!("Failed to send HTTP request to Gemini API: {}", e))
        }
    }
}
