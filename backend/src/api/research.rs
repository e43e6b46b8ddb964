//! Research API handlers
//!
//! Exposes the orchestrator over HTTP. `POST /api/research` runs one
//! submission to completion; `GET /api/research` returns the current state.

use crate::error::AppError;
use crate::research::{FailureKind, RequestState, Submission};
use crate::state::AppState;
use axum::{extract::State, Json};
use serde::Deserialize;
use std::sync::Arc;

/// Research request body
#[derive(Deserialize, Debug)]
pub struct ResearchRequest {
    /// Free-text product idea
    pub idea: String,
}

/// POST /api/research - Research a product idea
///
/// # Returns
/// * `Ok(Json<RequestState>)` - `success` state carrying the report
/// * `Err(AppError)` - 400 for a rejected idea, 502 for any generation
///   failure, 409 if a newer submission superseded this one
pub async fn submit_research(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ResearchRequest>,
) -> Result<Json<RequestState>, AppError> {
    let resolved = match state.orchestrator.submit(&request.idea).await {
        Submission::Resolved(resolved) => resolved,
        Submission::Superseded => return Err(AppError::Superseded),
    };

    match resolved {
        success @ RequestState::Success(_) => Ok(Json(success)),
        RequestState::Failure {
            kind: FailureKind::InvalidInput,
            message,
        } => Err(AppError::InvalidInput(message)),
        RequestState::Failure {
            kind: FailureKind::Generation,
            message,
        } => Err(AppError::Generation(message)),
        // A submission never resolves to these
        RequestState::Idle | RequestState::Loading => Err(AppError::Superseded),
    }
}

/// GET /api/research - Current request state
pub async fn get_research_state(State(state): State<Arc<AppState>>) -> Json<RequestState> {
    Json(state.orchestrator.state())
}
