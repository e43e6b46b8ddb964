//! Research module
//!
//! Everything needed to turn a product idea into a research report:
//! the prompt, the declared response schema, the Gemini client, and the
//! orchestrator that owns request state.

pub mod client;
pub mod constants;
pub mod error;
pub mod gemini_types;
pub mod orchestrator;
pub mod prompt;
pub mod schema;
pub mod types;

pub use client::{GeminiClient, GenerationClient};
pub use error::ResearchError;
pub use orchestrator::{ResearchOrchestrator, Submission};
pub use types::{
    Competitor, FailureKind, MarketAnalysis, RequestState, ResearchResult, SwotAnalysis,
};
