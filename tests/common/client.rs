//! HTTP client for end-to-end tests
//!
//! When API routes or request formats change, update only this file.

use super::constants::REQUEST_TIMEOUT_SECS;
use reqwest::Response;
use serde_json::json;
use std::time::Duration;

/// Thin wrapper around reqwest with methods for all server endpoints
pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    /// GET /api/search?q=...
    pub async fn search(&self, query: &str) -> Response {
        self.client
            .get(format!("{}/api/search", self.base_url))
            .query(&[("q", query)])
            .send()
            .await
            .expect("search request failed")
    }

    /// GET /api/search with no query parameter
    pub async fn search_missing_query(&self) -> Response {
        self.client
            .get(format!("{}/api/search", self.base_url))
            .send()
            .await
            .expect("search request failed")
    }

    /// GET /api/lyrics?id=...
    pub async fn lyrics_by_id(&self, id: u64) -> Response {
        self.client
            .get(format!("{}/api/lyrics", self.base_url))
            .query(&[("id", id.to_string())])
            .send()
            .await
            .expect("lyrics request failed")
    }

    /// GET /api/lyrics?title=...&artist=...
    pub async fn lyrics_by_meta(&self, title: &str, artist: &str) -> Response {
        self.client
            .get(format!("{}/api/lyrics", self.base_url))
            .query(&[("title", title), ("artist", artist)])
            .send()
            .await
            .expect("lyrics request failed")
    }

    /// GET /api/lyrics with no parameters
    pub async fn lyrics_missing_params(&self) -> Response {
        self.client
            .get(format!("{}/api/lyrics", self.base_url))
            .send()
            .await
            .expect("lyrics request failed")
    }

    /// POST /api/interpret
    pub async fn interpret(&self, lyrics: &str, title: &str, artist: &str) -> Response {
        self.client
            .post(format!("{}/api/interpret", self.base_url))
            .json(&json!({"lyrics": lyrics, "title": title, "artist": artist}))
            .send()
            .await
            .expect("interpret request failed")
    }

    /// GET /api/status
    pub async fn status(&self) -> Response {
        self.client
            .get(format!("{}/api/status", self.base_url))
            .send()
            .await
            .expect("status request failed")
    }
}
