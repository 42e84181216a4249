//! TemiLyrics Server Library
//!
//! This library exposes the internal modules for testing and potential reuse.

pub mod config;
pub mod genius;
pub mod interpret;
pub mod lyrics;
pub mod server;

// Re-export commonly used types for convenience
pub use config::{AppConfig, CliConfig, FileConfig, ProviderCredentials};
pub use server::{run_server, RequestsLoggingLevel, ServerConfig};
