//! Song search API route

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::error::ApiError;
use super::metrics::record_provider_request;
use super::state::ServerState;
use crate::config::GENIUS_TOKEN_ENV;
use crate::genius::SongSummary;

#[derive(Deserialize)]
struct SearchQuery {
    q: Option<String>,
}

#[derive(Serialize)]
struct SearchResponse {
    songs: Vec<SongSummary>,
}

async fn search(
    State(state): State<ServerState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, ApiError> {
    let query = params.q.as_deref().map(str::trim).unwrap_or_default();
    if query.is_empty() {
        return Err(ApiError::Validation(
            "Query parameter is required".to_string(),
        ));
    }

    let genius = state.genius.as_ref().ok_or_else(|| {
        ApiError::Configuration(format!("{} is not configured", GENIUS_TOKEN_ENV))
    })?;

    let started = Instant::now();
    let result = genius.search(query).await;
    record_provider_request("genius", result.is_ok(), started.elapsed());

    let songs = result?;
    Ok(Json(SearchResponse { songs }))
}

pub fn make_search_routes(state: ServerState) -> Router {
    Router::new().route("/search", get(search)).with_state(state)
}
