//! Research report types
//!
//! Structs that mirror the structured JSON the model is asked to return,
//! plus the request state owned by the orchestrator.

use serde::{Deserialize, Serialize};

/// Market overview for the product idea
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketAnalysis {
    /// Who the product is for
    pub target_audience: String,
    /// Estimated size of the addressable market
    pub market_size: String,
    /// Trends shaping the market
    pub key_trends: String,
}

/// A single competitor in the landscape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competitor {
    /// Competitor or product name
    pub name: String,
    /// What the competitor does well
    pub strengths: String,
    /// Where the competitor falls short
    pub weaknesses: String,
}

/// SWOT analysis of the product idea
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwotAnalysis {
    #[allow(missing_docs)]
    pub strengths: String,
    #[allow(missing_docs)]
    pub weaknesses: String,
    #[allow(missing_docs)]
    pub opportunities: String,
    #[allow(missing_docs)]
    pub threats: String,
}

/// Complete research report
///
/// All six sections are required when deserializing. The list sections may be
/// empty but must be present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchResult {
    /// Target audience, market size and trends
    pub market_analysis: MarketAnalysis,
    /// Key competitors, in the order the model returned them
    pub competitive_landscape: Vec<Competitor>,
    /// Strengths, weaknesses, opportunities, threats
    pub swot_analysis: SwotAnalysis,
    /// Suggested MVP features
    pub feature_suggestions: Vec<String>,
    /// High-level marketing strategies
    pub marketing_strategy: Vec<String>,
    /// Risks and challenges
    pub potential_risks: Vec<String>,
}

/// Why a request ended in failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The idea was rejected locally before any remote call
    InvalidInput,
    /// The generation client failed (transport, schema or configuration)
    Generation,
}

/// Request lifecycle state
///
/// Exactly one variant holds at any time. The orchestrator overwrites it
/// whenever a submission starts or resolves.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum RequestState {
    /// No request has been made yet
    #[default]
    Idle,
    /// A request is in flight
    Loading,
    /// The last request produced a report
    Success(ResearchResult),
    /// The last request failed
    Failure {
        /// Failure category
        kind: FailureKind,
        /// User-facing message
        message: String,
    },
}

impl RequestState {
    /// Build a failure state for a locally rejected idea
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::Failure {
            kind: FailureKind::InvalidInput,
            message: message.into(),
        }
    }

    /// Build the generic failure state for any generation client error
    pub fn generation_failure() -> Self {
        Self::Failure {
            kind: FailureKind::Generation,
            message: crate::research::constants::GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }

    /// Whether a request is in flight
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The report, if the last request succeeded
    pub fn result(&self) -> Option<&ResearchResult> {
        match self {
            Self::Success(result) => Some(result),
            _ => None,
        }
    }

    /// The user-facing error message, if the last request failed
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failure { message, .. } => Some(message),
            _ => None,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use serde_json::json;

    #[test]
    fn test_result_uses_camel_case_field_names() {
        let value = serde_json::to_value(water_bottle_report()).unwrap();
        let object = value.as_object().unwrap();
        for key in [
            "marketAnalysis",
            "competitiveLandscape",
            "swotAnalysis",
            "featureSuggestions",
            "marketingStrategy",
            "potentialRisks",
        ] {
            assert!(object.contains_key(key), "missing key {}", key);
        }
        assert!(value["marketAnalysis"].get("targetAudience").is_some());
        assert!(value["marketAnalysis"].get("keyTrends").is_some());
    }

    #[test]
    fn test_result_deserializes_with_empty_lists() {
        let mut value = serde_json::to_value(water_bottle_report()).unwrap();
        value["featureSuggestions"] = json!([]);
        value["potentialRisks"] = json!([]);

        let result: ResearchResult = serde_json::from_value(value).unwrap();
        assert!(result.feature_suggestions.is_empty());
        assert!(result.potential_risks.is_empty());
    }

    #[test]
    fn test_result_rejects_missing_section() {
        let mut value = serde_json::to_value(water_bottle_report()).unwrap();
        value.as_object_mut().unwrap().remove("swotAnalysis");

        let result: Result<ResearchResult, _> = serde_json::from_value(value);
        assert!(result.is_err());
    }

    #[test]
    fn test_result_rejects_null_list() {
        let mut value = serde_json::to_value(water_bottle_report()).unwrap();
        value["marketingStrategy"] = serde_json::Value::Null;

        let result: Result<ResearchResult, _> = serde_json::from_value(value);
        assert!(result.is_err());
    }

    #[test]
    fn test_request_state_serialization() {
        assert_eq!(
            serde_json::to_value(RequestState::Idle).unwrap(),
            json!({"status": "idle"})
        );
        assert_eq!(
            serde_json::to_value(RequestState::invalid_input("nope")).unwrap(),
            json!({"status": "failure", "data": {"kind": "invalid_input", "message": "nope"}})
        );

        let success = serde_json::to_value(RequestState::Success(water_bottle_report())).unwrap();
        assert_eq!(success["status"], "success");
        assert_eq!(success["data"]["competitiveLandscape"][0]["name"], "HidrateSpark");
    }

    #[test]
    fn test_request_state_accessors() {
        assert!(RequestState::Loading.is_loading());
        assert!(!RequestState::Idle.is_loading());

        let failure = RequestState::generation_failure();
        assert_eq!(
            failure.error_message(),
            Some(crate::research::constants::GENERIC_FAILURE_MESSAGE)
        );
        assert!(failure.result().is_none());

        let success = RequestState::Success(water_bottle_report());
        assert_eq!(success.result(), Some(&water_bottle_report()));
        assert!(success.error_message().is_none());
    }
}
