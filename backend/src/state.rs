//! Shared router state

use crate::config::Config;
use crate::research::{GeminiClient, GenerationClient, ResearchError, ResearchOrchestrator};
use std::sync::Arc;

/// State shared by every request handler
pub struct AppState {
    /// The single research orchestrator
    pub orchestrator: ResearchOrchestrator,
}

impl AppState {
    /// Create state around any generation client
    pub fn new(client: Arc<dyn GenerationClient>, max_idea_length: usize) -> Self {
        Self {
            orchestrator: ResearchOrchestrator::new(client, max_idea_length),
        }
    }

    /// Build state with a Gemini client from configuration
    ///
    /// # Errors
    /// * Returns `ResearchError::Configuration` if the client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, ResearchError> {
        let client = GeminiClient::new(&config.gemini)?;
        Ok(Self::new(Arc::new(client), config.research.max_idea_length))
    }
}
