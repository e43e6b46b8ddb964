//! Integration tests for the research flow end to end
//!
//! These tests drive the HTTP handlers against a mocked Gemini endpoint:
//! 1. Idea validation before any remote call
//! 2. Successful report round trip into state
//! 3. Failure collapsing into the generic message
//! 4. Overlapping submissions never receive each other's report

use async_trait::async_trait;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use mockito::{Server, ServerGuard};
use product_scout_backend::api::research::{
    get_research_state, submit_research, ResearchRequest,
};
use product_scout_backend::config::GeminiConfig;
use product_scout_backend::error::AppError;
use product_scout_backend::research::constants::{
    EMPTY_IDEA_MESSAGE, GENERIC_FAILURE_MESSAGE,
};
use product_scout_backend::research::{
    GeminiClient, GenerationClient, RequestState, ResearchError, ResearchResult,
};
use product_scout_backend::state::AppState;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::sync::Notify;

const MODEL_PATH: &str = "/models/gemini-2.5-flash:generateContent";

fn report_json() -> Value {
    json!({
        "marketAnalysis": {
            "targetAudience": "Health-conscious adults",
            "marketSize": "$180M and growing",
            "keyTrends": "Connected fitness devices"
        },
        "competitiveLandscape": [
            { "name": "HidrateSpark", "strengths": "Brand", "weaknesses": "Price" },
            { "name": "LARQ", "strengths": "UV cleaning", "weaknesses": "No tracking" }
        ],
        "swotAnalysis": {
            "strengths": "Clear benefit",
            "weaknesses": "Hardware cost",
            "opportunities": "Corporate wellness",
            "threats": "Copycats"
        },
        "featureSuggestions": ["Intake sensor", "App sync", "Glow reminders"],
        "marketingStrategy": ["Influencers", "Gym retail", "Social challenges"],
        "potentialRisks": ["Battery life", "Sensor accuracy"]
    })
}

fn envelope(text: &str) -> String {
    json!({
        "candidates": [{
            "content": { "parts": [{ "text": text }], "role": "model" },
            "finishReason": "STOP"
        }]
    })
    .to_string()
}

fn state_for(server: &ServerGuard) -> Arc<AppState> {
    let mut config = GeminiConfig::new("test-key");
    config.base_url = server.url();
    let client = GeminiClient::new(&config).expect("client builds");
    Arc::new(AppState::new(Arc::new(client), 10_000))
}

fn request(idea: &str) -> Json<ResearchRequest> {
    Json(ResearchRequest {
        idea: idea.to_string(),
    })
}

#[tokio::test]
async fn test_water_bottle_scenario() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", MODEL_PATH)
        .with_status(200)
        .with_body(envelope(&report_json().to_string()))
        .expect(1)
        .create_async()
        .await;
    let state = state_for(&server);

    let Json(result_state) = submit_research(
        State(state.clone()),
        request("A smart water bottle that tracks hydration."),
    )
    .await
    .expect("research succeeds");

    mock.assert_async().await;
    let expected: ResearchResult = serde_json::from_value(report_json()).unwrap();
    assert_eq!(result_state, RequestState::Success(expected.clone()));

    // The stored state serializes back to exactly what the model returned
    let Json(current) = get_research_state(State(state)).await;
    let serialized = serde_json::to_value(&current).unwrap();
    assert_eq!(serialized["status"], "success");
    assert_eq!(serialized["data"], report_json());
}

#[tokio::test]
async fn test_empty_idea_is_rejected_without_remote_call() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", MODEL_PATH)
        .expect(0)
        .create_async()
        .await;
    let state = state_for(&server);

    let error = submit_research(State(state.clone()), request(""))
        .await
        .unwrap_err();

    mock.assert_async().await;
    assert!(matches!(&error, AppError::InvalidInput(msg) if msg == EMPTY_IDEA_MESSAGE));
    assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);

    let Json(current) = get_research_state(State(state)).await;
    assert_eq!(current, RequestState::invalid_input(EMPTY_IDEA_MESSAGE));
}

#[tokio::test]
async fn test_transport_failure_returns_generic_message() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", MODEL_PATH)
        .with_status(503)
        .with_body(r#"{"error": {"message": "backend overloaded, key=abc"}}"#)
        .create_async()
        .await;
    let state = state_for(&server);

    let error = submit_research(State(state.clone()), request("idea"))
        .await
        .unwrap_err();

    mock.assert_async().await;
    assert_eq!(error.to_string(), GENERIC_FAILURE_MESSAGE);
    assert_eq!(error.into_response().status(), StatusCode::BAD_GATEWAY);

    let Json(current) = get_research_state(State(state.clone())).await;
    assert_eq!(current, RequestState::generation_failure());
    assert!(!state.orchestrator.is_loading());
}

#[tokio::test]
async fn test_schema_violation_returns_generic_message() {
    let mut report = report_json();
    report.as_object_mut().unwrap().remove("marketAnalysis");

    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", MODEL_PATH)
        .with_status(200)
        .with_body(envelope(&report.to_string()))
        .create_async()
        .await;
    let state = state_for(&server);

    let error = submit_research(State(state.clone()), request("idea"))
        .await
        .unwrap_err();

    mock.assert_async().await;
    assert!(matches!(&error, AppError::Generation(msg) if msg == GENERIC_FAILURE_MESSAGE));
    assert_eq!(
        get_research_state(State(state)).await.0,
        RequestState::generation_failure()
    );
}

#[tokio::test]
async fn test_initial_state_is_idle() {
    let server = Server::new_async().await;
    let state = state_for(&server);

    let Json(current) = get_research_state(State(state)).await;
    assert_eq!(
        serde_json::to_value(current).unwrap(),
        json!({"status": "idle"})
    );
}

/// Holds the "slow" idea open until released; answers anything else at once
struct HeldClient {
    started: Notify,
    release: Notify,
}

#[async_trait]
impl GenerationClient for HeldClient {
    async fn fetch_research(&self, idea: &str) -> Result<ResearchResult, ResearchError> {
        let mut report = report_json();
        report["marketAnalysis"]["targetAudience"] = json!(idea);
        if idea == "slow" {
            self.started.notify_one();
            self.release.notified().await;
        }
        serde_json::from_value(report).map_err(|e| ResearchError::SchemaViolation(e.to_string()))
    }
}

#[tokio::test]
async fn test_superseded_submission_gets_conflict_not_newer_report() {
    let client = Arc::new(HeldClient {
        started: Notify::new(),
        release: Notify::new(),
    });
    let state = Arc::new(AppState::new(client.clone(), 10_000));

    let slow = tokio::spawn({
        let state = state.clone();
        async move { submit_research(State(state), request("slow")).await }
    });
    client.started.notified().await;

    let Json(fast) = submit_research(State(state.clone()), request("fast"))
        .await
        .expect("newer submission succeeds");
    assert_eq!(
        fast.result().unwrap().market_analysis.target_audience,
        "fast"
    );

    client.release.notify_one();
    let error = slow.await.unwrap().unwrap_err();
    assert!(matches!(error, AppError::Superseded));
    assert_eq!(error.into_response().status(), StatusCode::CONFLICT);

    // The newer report stays in place
    let Json(current) = get_research_state(State(state)).await;
    assert_eq!(current, fast);
}
