//! Structured output schema
//!
//! The `responseSchema` sent to Gemini. It mirrors [`ResearchResult`] field for
//! field so the model is constrained to return conforming JSON.
//!
//! [`ResearchResult`]: crate::research::types::ResearchResult

use serde_json::{json, Value};

/// Top-level fields every report must carry
pub const REQUIRED_SECTIONS: [&str; 6] = [
    "marketAnalysis",
    "competitiveLandscape",
    "swotAnalysis",
    "featureSuggestions",
    "marketingStrategy",
    "potentialRisks",
];

fn string_list() -> Value {
    json!({ "type": "ARRAY", "items": { "type": "STRING" } })
}

/// Build the response schema for a research report
pub fn research_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "marketAnalysis": {
                "type": "OBJECT",
                "properties": {
                    "targetAudience": { "type": "STRING" },
                    "marketSize": { "type": "STRING" },
                    "keyTrends": { "type": "STRING" }
                },
                "required": ["targetAudience", "marketSize", "keyTrends"]
            },
            "competitiveLandscape": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": { "type": "STRING" },
                        "strengths": { "type": "STRING" },
                        "weaknesses": { "type": "STRING" }
                    },
                    "required": ["name", "strengths", "weaknesses"]
                }
            },
            "swotAnalysis": {
                "type": "OBJECT",
                "properties": {
                    "strengths": { "type": "STRING" },
                    "weaknesses": { "type": "STRING" },
                    "opportunities": { "type": "STRING" },
                    "threats": { "type": "STRING" }
                },
                "required": ["strengths", "weaknesses", "opportunities", "threats"]
            },
            "featureSuggestions": string_list(),
            "marketingStrategy": string_list(),
            "potentialRisks": string_list()
        },
        "required": REQUIRED_SECTIONS
    })
}
