//! Shared constants for end-to-end tests

/// Timeout for test HTTP requests, generous to avoid CI flakiness
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Genius id of the song every mock fixture describes
pub const SONG_ID: u64 = 7076626;
pub const SONG_TITLE: &str = "23";
pub const SONG_ARTIST: &str = "Burna Boy";
pub const SONG_URL: &str = "https://genius.com/Burna-boy-23-lyrics";

/// Lyrics returned by the mock lyrics provider
pub const SAMPLE_LYRICS: &str = "They never believed in twenty-three\nNow everybody wan follow me";

/// A well-formed interpretation object, as pure JSON text
pub const SAMPLE_INTERPRETATION: &str = r#"{
  "theme": "perseverance",
  "tone": "defiant",
  "summary": "A reflection on doubt and vindication.",
  "line_analysis": [{"line": "They never believed", "meaning": "Early rejection"}],
  "cultural_references": ["Michael Jordan's jersey number"],
  "related_events": [],
  "external_context": {"source": "", "quote": "", "relevance_to_lyrics": ""}
}"#;
