//! Lyrics retrieval.
//!
//! A single canonical source backs the lyrics endpoint: a public
//! LRCLIB-style lookup by (artist, title). The trait seam exists so tests
//! can substitute a scripted source.

mod lrclib;

pub use lrclib::LrcLibSource;

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur when fetching lyrics.
#[derive(Debug, Error)]
pub enum LyricsError {
    #[error("Lyrics not found")]
    NotFound,

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Lyrics provider returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Invalid lyrics response: {0}")]
    InvalidResponse(String),

    #[error("Request timeout")]
    Timeout,
}

impl From<reqwest::Error> for LyricsError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            LyricsError::Timeout
        } else {
            LyricsError::Connection(e.to_string())
        }
    }
}

/// A source of plain-text lyrics, looked up by (artist, title).
#[async_trait]
pub trait LyricsSource: Send + Sync {
    /// Short identifier reported in the lyrics response (e.g., "lrclib").
    fn name(&self) -> &'static str;

    /// Fetch lyrics for a song. One outbound call, no retries.
    async fn fetch(&self, artist: &str, title: &str) -> Result<String, LyricsError>;
}
