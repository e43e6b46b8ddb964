//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults. The Gemini API key is the only required setting.

use crate::research::constants::{DEFAULT_MAX_IDEA_LENGTH, GEMINI_API_BASE_URL};
use crate::research::ResearchError;
use std::env;
use std::fmt;

/// Environment variable holding the Gemini API key
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Fallback environment variable for the API key
pub const FALLBACK_API_KEY_VAR: &str = "API_KEY";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Gemini API configuration
    pub gemini: GeminiConfig,
    /// Research request limits
    pub research: ResearchConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind the server to
    pub port: u16,
    /// Host address to bind to
    pub host: String,
}

/// Gemini API configuration
#[derive(Clone)]
pub struct GeminiConfig {
    /// API key sent with every request
    pub api_key: String,
    /// Base URL of the REST API
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

/// Research request limits
#[derive(Debug, Clone)]
pub struct ResearchConfig {
    /// Maximum idea length in characters
    pub max_idea_length: usize,
}

// Keep the key out of logs.
impl fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl GeminiConfig {
    /// Create a configuration with default endpoint and timeout
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: GEMINI_API_BASE_URL.to_string(),
            timeout_secs: 60,
        }
    }

    /// Load Gemini configuration from environment variables
    ///
    /// # Errors
    /// * Returns `ResearchError::Configuration` if neither `GEMINI_API_KEY`
    ///   nor `API_KEY` is set to a non-empty value.
    pub fn from_env() -> Result<Self, ResearchError> {
        let api_key = [API_KEY_VAR, FALLBACK_API_KEY_VAR]
            .iter()
            .filter_map(|var| env::var(var).ok())
            .map(|key| key.trim().to_string())
            .find(|key| !key.is_empty())
            .ok_or_else(|| {
                ResearchError::Configuration(format!(
                    "{} environment variable is not set or is empty. Please set it to use the Gemini API.",
                    API_KEY_VAR
                ))
            })?;

        Ok(Self {
            api_key,
            base_url: env::var("GEMINI_API_BASE_URL")
                .unwrap_or_else(|_| GEMINI_API_BASE_URL.to_string()),
            timeout_secs: env::var("GEMINI_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .filter(|t| *t > 0)
                .unwrap_or(60),
        })
    }
}

impl Config {
    /// Load configuration from environment variables with defaults
    ///
    /// # Errors
    /// * Returns `ResearchError::Configuration` if the API key is missing.
    pub fn from_env() -> Result<Self, ResearchError> {
        Ok(Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8080),
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            },
            gemini: GeminiConfig::from_env()?,
            research: ResearchConfig {
                max_idea_length: env::var("MAX_IDEA_LENGTH")
                    .ok()
                    .and_then(|m| m.parse().ok())
                    .filter(|m| *m > 0)
                    .unwrap_or(DEFAULT_MAX_IDEA_LENGTH),
            },
        })
    }

    /// Get the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for var in [
            API_KEY_VAR,
            FALLBACK_API_KEY_VAR,
            "GEMINI_API_BASE_URL",
            "GEMINI_TIMEOUT_SECS",
            "MAX_IDEA_LENGTH",
            "PORT",
            "HOST",
        ] {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_missing_api_key_is_configuration_error() {
        clear_env();
        let result = Config::from_env();
        assert!(matches!(result, Err(ResearchError::Configuration(_))));
    }

    #[test]
    #[serial]
    fn test_blank_api_key_is_configuration_error() {
        clear_env();
        env::set_var(API_KEY_VAR, "   ");
        let result = GeminiConfig::from_env();
        assert!(matches!(result, Err(ResearchError::Configuration(_))));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_fallback_api_key() {
        clear_env();
        env::set_var(FALLBACK_API_KEY_VAR, "fallback-key");
        let config = GeminiConfig::from_env().unwrap();
        assert_eq!(config.api_key, "fallback-key");
        clear_env();
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        env::set_var(API_KEY_VAR, "test-key");
        let config = Config::from_env().unwrap();
        assert_eq!(config.server_addr(), "0.0.0.0:8080");
        assert_eq!(config.gemini.api_key, "test-key");
        assert_eq!(config.gemini.base_url, GEMINI_API_BASE_URL);
        assert_eq!(config.gemini.timeout_secs, 60);
        assert_eq!(config.research.max_idea_length, DEFAULT_MAX_IDEA_LENGTH);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_overrides() {
        clear_env();
        env::set_var(API_KEY_VAR, "test-key");
        env::set_var("PORT", "9000");
        env::set_var("HOST", "127.0.0.1");
        env::set_var("GEMINI_TIMEOUT_SECS", "5");
        env::set_var("MAX_IDEA_LENGTH", "not-a-number");
        let config = Config::from_env().unwrap();
        assert_eq!(config.server_addr(), "127.0.0.1:9000");
        assert_eq!(config.gemini.timeout_secs, 5);
        assert_eq!(config.research.max_idea_length, DEFAULT_MAX_IDEA_LENGTH);
        clear_env();
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = GeminiConfig::new("super-secret");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
