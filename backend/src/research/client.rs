//! Generation client
//!
//! Direct HTTP client for the Gemini `generateContent` endpoint, plus the
//! [`GenerationClient`] trait the orchestrator depends on.

use crate::config::GeminiConfig;
use crate::research::constants::{API_KEY_HEADER, GEMINI_MODEL, GEMINI_TEMPERATURE};
use crate::research::gemini_types::{GeminiApiRequest, GeminiApiResponse};
use crate::research::prompt::build_research_prompt;
use crate::research::schema::research_response_schema;
use crate::research::types::ResearchResult;
use crate::research::ResearchError;
use async_trait::async_trait;
use std::time::Duration;

/// Produces a research report for a product idea
///
/// Implementations are stateless with respect to requests: every call issues
/// exactly one remote request and nothing is cached.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Fetch a research report for `idea`
    async fn fetch_research(&self, idea: &str) -> Result<ResearchResult, ResearchError>;
}

/// Gemini-backed generation client
#[derive(Clone)]
pub struct GeminiClient {
    /// Shared HTTP client (connection pooling)
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    /// Create a client from configuration
    ///
    /// # Errors
    /// * Returns `ResearchError::Configuration` if the API key is empty or the
    ///   HTTP client cannot be built.
    pub fn new(config: &GeminiConfig) -> Result<Self, ResearchError> {
        if config.api_key.trim().is_empty() {
            return Err(ResearchError::Configuration("API key is empty".to_string()));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                ResearchError::Configuration(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Send one structured request and return the raw response text
    async fn generate_content(&self, prompt: String) -> Result<String, ResearchError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, GEMINI_MODEL);
        let request_body =
            GeminiApiRequest::structured(prompt, research_response_schema(), GEMINI_TEMPERATURE);

        tracing::debug!(
            url = %url,
            model = GEMINI_MODEL,
            prompt_len = request_body.contents[0].parts[0].text.len(),
            "Calling Gemini API"
        );

        let response = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let status_code = status.as_u16();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error body".to_string());

            tracing::error!(
                status_code = status_code,
                error_body = %error_body,
                "Gemini API returned error status"
            );

            if status_code == 429 {
                return Err(ResearchError::Transport(format!(
                    "Gemini API rate limit exceeded (HTTP {}): {}",
                    status_code, error_body
                )));
            }

            return Err(ResearchError::Transport(format!(
                "Gemini API returned error status {}: {}",
                status_code, error_body
            )));
        }

        let response_body = response.text().await.map_err(|e| {
            ResearchError::Transport(format!(
                "Failed to read response body from Gemini API: {}",
                e
            ))
        })?;

        let parsed: GeminiApiResponse = serde_json::from_str(&response_body).map_err(|e| {
            ResearchError::Transport(format!(
                "Failed to parse JSON response from Gemini API: {} - Response body: {}",
                e, response_body
            ))
        })?;

        if let Some(reason) = parsed
            .prompt_feedback
            .as_ref()
            .and_then(|feedback| feedback.block_reason.as_ref())
        {
            return Err(ResearchError::SchemaViolation(format!(
                "Gemini API blocked the prompt: {}",
                reason
            )));
        }

        let candidate = parsed.candidates.into_iter().next().ok_or_else(|| {
            ResearchError::SchemaViolation("Gemini API response contains no candidates".to_string())
        })?;

        let finish_reason = candidate.finish_reason;
        let text: String = candidate
            .content
            .map(|content| content.parts.into_iter().map(|part| part.text).collect())
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(ResearchError::SchemaViolation(format!(
                "Gemini API response text is empty (finish reason: {})",
                finish_reason.as_deref().unwrap_or("unknown")
            )));
        }

        tracing::debug!(
            response_len = text.len(),
            finish_reason = ?finish_reason,
            "Successfully received response from Gemini API"
        );

        Ok(text)
    }
}

#[async_trait]
impl GenerationClient for GeminiClient {
    async fn fetch_research(&self, idea: &str) -> Result<ResearchResult, ResearchError> {
        let text = self.generate_content(build_research_prompt(idea)).await?;
        parse_research(&text)
    }
}

/// Parse the model's response text into a research report
///
/// The text is trimmed and an enclosing Markdown code fence is tolerated.
///
/// # Errors
/// * Returns `ResearchError::SchemaViolation` if the text is not JSON, is not
///   an object, has no keys, or is missing a required section.
pub fn parse_research(text: &str) -> Result<ResearchResult, ResearchError> {
    let json_text = strip_code_fence(text.trim());

    let value: serde_json::Value = serde_json::from_str(json_text).map_err(|e| {
        ResearchError::SchemaViolation(format!("Response is not valid JSON: {}", e))
    })?;

    match value.as_object() {
        None => {
            return Err(ResearchError::SchemaViolation(
                "Response is not a JSON object".to_string(),
            ))
        }
        Some(object) if object.is_empty() => {
            return Err(ResearchError::SchemaViolation(
                "Received empty research data from API".to_string(),
            ))
        }
        Some(_) => {}
    }

    serde_json::from_value(value).map_err(|e| {
        ResearchError::SchemaViolation(format!("Response does not match research schema: {}", e))
    })
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
