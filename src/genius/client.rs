//! HTTP client for the Genius API.

use anyhow::Result;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use super::models::{SongDetails, SongSummary};

const USER_AGENT: &str = "TemiLyrics/1.0";

/// Errors that can occur when talking to the Genius API.
#[derive(Debug, Error)]
pub enum GeniusError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Genius API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Invalid Genius response: {0}")]
    InvalidResponse(String),

    #[error("Request timeout")]
    Timeout,
}

impl From<reqwest::Error> for GeniusError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            GeniusError::Timeout
        } else {
            GeniusError::Connection(e.to_string())
        }
    }
}

/// HTTP client for the Genius search and song metadata endpoints.
///
/// One outbound call per method, no retries.
pub struct GeniusClient {
    client: Client,
    base_url: String,
    token: String,
}

#[derive(Deserialize)]
struct SearchResponse {
    response: SearchInner,
}

#[derive(Deserialize)]
struct SearchInner {
    hits: Option<Vec<SearchHit>>,
}

#[derive(Deserialize)]
struct SearchHit {
    result: Option<HitResult>,
}

#[derive(Deserialize)]
struct HitResult {
    id: Option<u64>,
    title: Option<String>,
    full_title: Option<String>,
    song_art_image_thumbnail_url: Option<String>,
    header_image_thumbnail_url: Option<String>,
    primary_artist: Option<GeniusArtist>,
}

#[derive(Deserialize)]
struct GeniusArtist {
    name: Option<String>,
}

#[derive(Deserialize)]
struct SongResponse {
    response: SongInner,
}

#[derive(Deserialize)]
struct SongInner {
    song: Option<GeniusSong>,
}

#[derive(Deserialize)]
struct GeniusSong {
    id: Option<u64>,
    title: Option<String>,
    url: Option<String>,
    primary_artist: Option<GeniusArtist>,
}

impl GeniusClient {
    /// Create a new Genius client.
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the Genius API (e.g., "https://api.genius.com").
    /// * `token` - API access token, sent as a bearer header.
    /// * `timeout` - Timeout applied to every request.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self {
            client,
            base_url,
            token: token.into(),
        })
    }

    /// Search Genius for songs matching a free-text query.
    ///
    /// Hits that are missing an id, title, or artist are skipped.
    pub async fn search(&self, query: &str) -> Result<Vec<SongSummary>, GeniusError> {
        let url = format!("{}/search?q={}", self.base_url, urlencoding::encode(query));

        debug!(query = %query, "Searching Genius");

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GeniusError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| GeniusError::InvalidResponse(format!("Failed to parse search response: {}", e)))?;

        Ok(normalize_hits(body))
    }

    /// Fetch metadata for a single song by its Genius id.
    pub async fn song(&self, id: u64) -> Result<SongDetails, GeniusError> {
        let url = format!("{}/songs/{}", self.base_url, id);

        debug!(song_id = id, "Fetching song from Genius");

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GeniusError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: SongResponse = response
            .json()
            .await
            .map_err(|e| GeniusError::InvalidResponse(format!("Failed to parse song response: {}", e)))?;

        normalize_song(body)
    }
}

fn normalize_hits(body: SearchResponse) -> Vec<SongSummary> {
    body.response
        .hits
        .unwrap_or_default()
        .into_iter()
        .filter_map(|hit| {
            let result = hit.result?;
            let id = result.id?;
            let title = result.title?;
            let artist = result.primary_artist.and_then(|a| a.name)?;
            let full_title = result
                .full_title
                .unwrap_or_else(|| format!("{} by {}", title, artist));
            Some(SongSummary {
                id,
                title,
                artist,
                full_title,
                thumbnail_url: result.song_art_image_thumbnail_url,
                header_image_thumbnail_url: result.header_image_thumbnail_url,
            })
        })
        .collect()
}

fn normalize_song(body: SongResponse) -> Result<SongDetails, GeniusError> {
    let song = body
        .response
        .song
        .ok_or_else(|| GeniusError::InvalidResponse("No song in response".to_string()))?;

    let id = song
        .id
        .ok_or_else(|| GeniusError::InvalidResponse("Song has no id".to_string()))?;
    let title = song
        .title
        .ok_or_else(|| GeniusError::InvalidResponse("Song has no title".to_string()))?;
    let artist = song
        .primary_artist
        .and_then(|a| a.name)
        .ok_or_else(|| GeniusError::InvalidResponse("Song has no primary artist".to_string()))?;

    Ok(SongDetails {
        id,
        title,
        artist,
        url: song.url,
    })
}
