//! Genius API client for song search and metadata lookup.

mod client;
mod models;

pub use client::{GeniusClient, GeniusError};
pub use models::{SongDetails, SongSummary};
