//! Error taxonomy at the HTTP boundary.
//!
//! Every adapter failure is translated into one JSON envelope
//! `{"error": message}` with the status that matches the failure kind;
//! malformed model output additionally carries the raw text.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::genius::GeniusError;
use crate::interpret::InterpretError;
use crate::lyrics::LyricsError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Caller input missing or malformed (400).
    #[error("{0}")]
    Validation(String),

    /// Deployment misconfiguration, e.g. a missing credential (500).
    #[error("{0}")]
    Configuration(String),

    /// Upstream reports no result (404).
    #[error("{0}")]
    NotFound(String),

    /// Upstream reachable but returned non-success or an unexpected shape (500).
    #[error("{0}")]
    Upstream(String),

    /// Completion provider returned no content at all (502).
    #[error("Model did not return any response")]
    EmptyModelResponse,

    /// Completion provider's text could not be coerced into JSON (500).
    #[error("Interpretation was not returned in valid JSON format")]
    MalformedModelResponse { raw: String },
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::EmptyModelResponse => StatusCode::BAD_GATEWAY,
            ApiError::MalformedModelResponse { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ApiError::MalformedModelResponse { raw } => {
                json!({"error": self.to_string(), "raw": raw})
            }
            _ => json!({"error": self.to_string()}),
        };
        (status, Json(body)).into_response()
    }
}

impl From<GeniusError> for ApiError {
    fn from(e: GeniusError) -> Self {
        ApiError::Upstream(e.to_string())
    }
}

impl From<LyricsError> for ApiError {
    fn from(e: LyricsError) -> Self {
        match e {
            LyricsError::NotFound => ApiError::NotFound("Lyrics not found".to_string()),
            other => ApiError::Upstream(other.to_string()),
        }
    }
}

impl From<InterpretError> for ApiError {
    fn from(e: InterpretError) -> Self {
        match e {
            InterpretError::EmptyResponse => ApiError::EmptyModelResponse,
            InterpretError::Malformed { raw } => ApiError::MalformedModelResponse { raw },
            InterpretError::Llm(llm) => ApiError::Upstream(llm.to_string()),
        }
    }
}
