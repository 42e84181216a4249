//! LRCLIB lyrics source.

use anyhow::Result;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use super::{LyricsError, LyricsSource};

/// Lyrics source backed by the public LRCLIB API.
pub struct LrcLibSource {
    client: Client,
    base_url: String,
}

#[derive(Deserialize)]
struct LrcLibResponse {
    #[serde(rename = "plainLyrics")]
    plain_lyrics: Option<String>,
    #[serde(rename = "syncedLyrics")]
    synced_lyrics: Option<String>,
    #[serde(default)]
    instrumental: bool,
}

impl LrcLibSource {
    /// Create a new LRCLIB source.
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the service (e.g., "https://lrclib.net").
    /// * `timeout` - Timeout applied to every request.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl LyricsSource for LrcLibSource {
    fn name(&self) -> &'static str {
        "lrclib"
    }

    async fn fetch(&self, artist: &str, title: &str) -> Result<String, LyricsError> {
        let url = format!(
            "{}/api/get?artist_name={}&track_name={}",
            self.base_url,
            urlencoding::encode(artist),
            urlencoding::encode(title)
        );

        debug!(artist = %artist, title = %title, "Fetching lyrics from LRCLIB");

        let response = self.client.get(&url).send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(LyricsError::NotFound),
            status if !status.is_success() => {
                let message = response.text().await.unwrap_or_default();
                Err(LyricsError::Api {
                    status: status.as_u16(),
                    message,
                })
            }
            _ => {
                let body: LrcLibResponse = response.json().await.map_err(|e| {
                    LyricsError::InvalidResponse(format!("Failed to parse lyrics response: {}", e))
                })?;
                extract_lyrics(body)
            }
        }
    }
}

fn extract_lyrics(body: LrcLibResponse) -> Result<String, LyricsError> {
    if body.instrumental {
        return Err(LyricsError::NotFound);
    }

    if let Some(plain) = body.plain_lyrics.filter(|l| !l.trim().is_empty()) {
        return Ok(plain.trim().to_string());
    }

    if let Some(synced) = body.synced_lyrics {
        let stripped = strip_timestamps(&synced);
        if !stripped.is_empty() {
            return Ok(stripped);
        }
    }

    Err(LyricsError::NotFound)
}

/// Strip LRC `[mm:ss.xx]` tags from synced lyrics, keeping the text.
fn strip_timestamps(synced: &str) -> String {
    let mut lines = Vec::new();
    for line in synced.lines() {
        let mut rest = line.trim_start();
        while rest.starts_with('[') {
            match rest.find(']') {
                Some(end) => rest = rest[end + 1..].trim_start(),
                None => {
                    // Malformed tag, drop the line
                    rest = "";
                }
            }
        }
        if !rest.is_empty() {
            lines.push(rest.to_string());
        }
    }
    lines.join("\n")
}
