//! Error types and error handling for the HTTP API
//!
//! Every error implements `IntoResponse` to provide consistent error formatting.
//! Client failures reach this layer only as the generic user-facing message;
//! their details stay in the logs.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error types
#[derive(Error, Debug)]
pub enum AppError {
    /// The submitted idea was rejected before any remote call
    #[error("{0}")]
    InvalidInput(String),

    /// The research request failed upstream
    #[error("{0}")]
    Generation(String),

    /// A newer submission took over before this one resolved
    #[error("Request was superseded by a newer submission")]
    Superseded,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Generation(_) => StatusCode::BAD_GATEWAY,
            AppError::Superseded => StatusCode::CONFLICT,
        };

        let body = Json(json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
