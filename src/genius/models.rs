use serde::Serialize;

/// A search hit, normalized from Genius' response schema.
#[derive(Debug, Clone, Serialize)]
pub struct SongSummary {
    pub id: u64,
    pub title: String,
    pub artist: String,
    pub full_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_image_thumbnail_url: Option<String>,
}

/// Metadata for a single song, used to resolve an id into (title, artist).
#[derive(Debug, Clone, Serialize)]
pub struct SongDetails {
    pub id: u64,
    pub title: String,
    pub artist: String,
    pub url: Option<String>,
}
