//! Interpretation API route

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;

use super::error::ApiError;
use super::metrics::record_provider_request;
use super::state::ServerState;
use crate::config::LLM_API_KEY_ENV;

#[derive(Deserialize, Debug)]
struct InterpretBody {
    #[serde(default)]
    lyrics: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    artist: String,
}

#[derive(Serialize)]
struct InterpretResponse {
    interpretation: Value,
}

async fn interpret(
    State(state): State<ServerState>,
    Json(body): Json<InterpretBody>,
) -> Result<Json<InterpretResponse>, ApiError> {
    let lyrics = body.lyrics.trim();
    let title = body.title.trim();
    let artist = body.artist.trim();
    if lyrics.is_empty() || title.is_empty() || artist.is_empty() {
        return Err(ApiError::Validation(
            "Lyrics, title, and artist are required".to_string(),
        ));
    }

    let interpreter = state.interpreter.as_ref().ok_or_else(|| {
        ApiError::Configuration(format!("{} is not configured", LLM_API_KEY_ENV))
    })?;

    let started = Instant::now();
    let result = interpreter.interpret(lyrics, title, artist).await;
    record_provider_request("llm", result.is_ok(), started.elapsed());

    let interpretation = result?;
    Ok(Json(InterpretResponse { interpretation }))
}

pub fn make_interpret_routes(state: ServerState) -> Router {
    Router::new()
        .route("/interpret", post(interpret))
        .with_state(state)
}
