//! Mock upstream providers
//!
//! Each external service the server talks to (Genius, LRCLIB, the
//! completion API) is emulated by a small axum router on a random port.
//! Behavior is scripted per test, and every mock counts its hits so tests
//! can assert that no outbound call was made.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::TcpListener;

use super::constants::*;

#[derive(Clone)]
pub enum GeniusBehavior {
    /// Serve the standard song fixture
    Ok,
    /// Fail every request with this status
    Fail(u16),
}

#[derive(Clone)]
pub enum LyricsBehavior {
    Found(String),
    NotFound,
    Instrumental,
    Fail(u16),
}

#[derive(Clone)]
pub enum LlmBehavior {
    /// Answer with this completion text
    Reply(String),
    /// Answer with an empty completion
    EmptyContent,
    Fail(u16),
}

#[derive(Clone)]
pub struct MockBehavior {
    pub genius: GeniusBehavior,
    pub lyrics: LyricsBehavior,
    pub llm: LlmBehavior,
}

impl Default for MockBehavior {
    fn default() -> Self {
        MockBehavior {
            genius: GeniusBehavior::Ok,
            lyrics: LyricsBehavior::Found(SAMPLE_LYRICS.to_string()),
            llm: LlmBehavior::Reply(SAMPLE_INTERPRETATION.to_string()),
        }
    }
}

pub struct MockProviders {
    pub genius_base_url: String,
    pub lyrics_base_url: String,
    pub llm_base_url: String,
    pub genius_hits: Arc<AtomicUsize>,
    pub lyrics_hits: Arc<AtomicUsize>,
    pub llm_hits: Arc<AtomicUsize>,
}

impl MockProviders {
    pub async fn spawn(behavior: MockBehavior) -> Self {
        let genius_hits = Arc::new(AtomicUsize::new(0));
        let lyrics_hits = Arc::new(AtomicUsize::new(0));
        let llm_hits = Arc::new(AtomicUsize::new(0));

        let genius_app = Router::new()
            .route("/search", get(genius_search))
            .route("/songs/{id}", get(genius_song))
            .with_state(MockState {
                hits: genius_hits.clone(),
                behavior: behavior.genius,
            });

        let lyrics_app = Router::new()
            .route("/api/get", get(lyrics_get))
            .with_state(MockState {
                hits: lyrics_hits.clone(),
                behavior: behavior.lyrics,
            });

        let llm_app = Router::new()
            .route("/chat/completions", post(llm_completions))
            .with_state(MockState {
                hits: llm_hits.clone(),
                behavior: behavior.llm,
            });

        MockProviders {
            genius_base_url: serve(genius_app).await,
            lyrics_base_url: serve(lyrics_app).await,
            llm_base_url: serve(llm_app).await,
            genius_hits,
            lyrics_hits,
            llm_hits,
        }
    }

    pub fn total_hits(&self) -> usize {
        self.genius_hits.load(Ordering::SeqCst)
            + self.lyrics_hits.load(Ordering::SeqCst)
            + self.llm_hits.load(Ordering::SeqCst)
    }
}

async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock provider");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{}", addr)
}

#[derive(Clone)]
struct MockState<B: Clone> {
    hits: Arc<AtomicUsize>,
    behavior: B,
}

// ---------------------------------------------------------------------------
// Genius
// ---------------------------------------------------------------------------

async fn genius_search(
    State(state): State<MockState<GeniusBehavior>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);

    match state.behavior {
        GeniusBehavior::Fail(status) => failure(status),
        GeniusBehavior::Ok => {
            let query = params.get("q").cloned().unwrap_or_default();
            let hits = if query.is_empty() {
                json!([])
            } else {
                json!([
                    {
                        "type": "song",
                        "result": {
                            "id": SONG_ID,
                            "title": SONG_TITLE,
                            "full_title": format!("{} by {}", SONG_TITLE, SONG_ARTIST),
                            "song_art_image_thumbnail_url": "https://images.example/23.300x300.jpg",
                            "header_image_thumbnail_url": "https://images.example/23-header.300x300.jpg",
                            "primary_artist": {"name": SONG_ARTIST}
                        }
                    }
                ])
            };
            Json(json!({"meta": {"status": 200}, "response": {"hits": hits}})).into_response()
        }
    }
}

async fn genius_song(
    State(state): State<MockState<GeniusBehavior>>,
    Path(id): Path<u64>,
) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);

    match state.behavior {
        GeniusBehavior::Fail(status) => failure(status),
        GeniusBehavior::Ok => {
            if id != SONG_ID {
                return failure(404);
            }
            Json(json!({
                "response": {
                    "song": {
                        "id": SONG_ID,
                        "title": SONG_TITLE,
                        "url": SONG_URL,
                        "primary_artist": {"name": SONG_ARTIST}
                    }
                }
            }))
            .into_response()
        }
    }
}

// ---------------------------------------------------------------------------
// LRCLIB
// ---------------------------------------------------------------------------

async fn lyrics_get(State(state): State<MockState<LyricsBehavior>>) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);

    match &state.behavior {
        LyricsBehavior::Fail(status) => failure(*status),
        LyricsBehavior::NotFound => failure(404),
        LyricsBehavior::Instrumental => Json(json!({
            "plainLyrics": null,
            "syncedLyrics": null,
            "instrumental": true
        }))
        .into_response(),
        LyricsBehavior::Found(lyrics) => Json(json!({
            "plainLyrics": lyrics,
            "syncedLyrics": null,
            "instrumental": false
        }))
        .into_response(),
    }
}

// ---------------------------------------------------------------------------
// Completion API
// ---------------------------------------------------------------------------

async fn llm_completions(State(state): State<MockState<LlmBehavior>>) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);

    let content = match &state.behavior {
        LlmBehavior::Fail(status) => return failure(*status),
        LlmBehavior::EmptyContent => String::new(),
        LlmBehavior::Reply(text) => text.clone(),
    };

    Json(json!({
        "choices": [
            {
                "message": {"role": "assistant", "content": content},
                "finish_reason": "stop"
            }
        ],
        "usage": {"prompt_tokens": 100, "completion_tokens": 200, "total_tokens": 300}
    }))
    .into_response()
}

fn failure(status: u16) -> Response {
    (
        StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        "mock provider failure",
    )
        .into_response()
}
