//! Lyrics API route

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

#[derive(Deserialize)]
struct LyricsQuery {
    id: Option<u64>,
    title: Option<String>,
    artist: Option<String>,
}

#[derive(Serialize)]
struct LyricsResponse {
    lyrics: String,
    title: String,
    artist: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    source: String,
}

/// Song identity the lyrics lookup runs against: either taken verbatim
/// from the query or resolved from a song id first.
struct ResolvedSong {
    title: String,
    artist: String,
    url: Option<String>,
}

async fn resolve_song(state: &ServerState, params: LyricsQuery) -> Result<ResolvedSong, ApiError> {
    if let Some(id) = params.id {
        let genius = state.genius.as_ref().ok_or_else(|| {
            ApiError::Configuration(format!("{} is not configured", GENIUS_TOKEN_ENV))
        })?;

        let started = Instant::now();
        let result = genius.song(id).await;
        record_provider_request("genius", result.is_ok(), started.elapsed());

        let song = result?;
        return Ok(ResolvedSong {
            title: song.title,
            artist: song.artist,
            url: song.url,
        });
    }

    let title = params.title.as_deref().map(str::trim).unwrap_or_default();
    let artist = params.artist.as_deref().map(str::trim).unwrap_or_default();
    if title.is_empty() || artist.is_empty() {
        return Err(ApiError::Validation(
            "Song id or title and artist are required".to_string(),
        ));
    }

    Ok(ResolvedSong {
        title: title.to_string(),
        artist: artist.to_string(),
        url: None,
    })
}

async fn lyrics(
    State(state): State<ServerState>,
    Query(params): Query<LyricsQuery>,
) -> Result<Json<LyricsResponse>, ApiError> {
    let song = resolve_song(&state, params).await?;

    let started = Instant::now();
    let result = state.lyrics.fetch(&song.artist, &song.title).await;
    record_provider_request(state.lyrics.name(), result.is_ok(), started.elapsed());

    let lyrics = result?;
    Ok(Json(LyricsResponse {
        lyrics,
        title: song.title,
        artist: song.artist,
        url: song.url,
        source: state.lyrics.name().to_string(),
    }))
}

pub fn make_lyrics_routes(state: ServerState) -> Router {
    Router::new().route("/lyrics", get(lyrics)).with_state(state)
}
