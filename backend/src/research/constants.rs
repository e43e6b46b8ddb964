//! Research constants
//!
//! Centralized constants used throughout the research module.

/// Gemini model used for every research request
pub const GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Default Gemini REST endpoint
pub const GEMINI_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Sampling temperature sent with every request
pub const GEMINI_TEMPERATURE: f32 = 0.7;

/// MIME type requested for the structured response
pub const JSON_MIME_TYPE: &str = "application/json";

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "x-goog-api-key";

/// Shown when the submitted idea is empty or whitespace
pub const EMPTY_IDEA_MESSAGE: &str = "Please enter a product idea.";

/// Shown for every generation failure, whatever the cause
pub const GENERIC_FAILURE_MESSAGE: &str =
    "An error occurred while fetching research data. Please try again.";

/// Default maximum idea length in characters
pub const DEFAULT_MAX_IDEA_LENGTH: usize = 10_000;
