mod file_config;

pub use file_config::FileConfig;

use crate::server::RequestsLoggingLevel;
use anyhow::Result;
use clap::ValueEnum;
use std::path::PathBuf;

/// Environment variable holding the Genius API access token.
pub const GENIUS_TOKEN_ENV: &str = "GENIUS_ACCESS_TOKEN";

/// Environment variable holding the completion provider API key.
pub const LLM_API_KEY_ENV: &str = "GROQ_API_KEY";

pub const DEFAULT_GENIUS_BASE_URL: &str = "https://api.genius.com";
pub const DEFAULT_LYRICS_BASE_URL: &str = "https://lrclib.net";
pub const DEFAULT_LLM_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_LLM_MODEL: &str = "llama-3.3-70b-versatile";

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub port: u16,
    pub metrics_port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub frontend_dir: PathBuf,
    pub provider_timeout_sec: u64,
    pub llm_timeout_sec: u64,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            port: 3001,
            metrics_port: 9092,
            logging_level: RequestsLoggingLevel::Path,
            frontend_dir: PathBuf::from("frontend"),
            provider_timeout_sec: 30,
            llm_timeout_sec: 120,
        }
    }
}

/// Provider credentials, read from the environment exactly once at startup.
///
/// A missing credential is not fatal here: the corresponding adapter is not
/// constructed and its endpoint reports the missing variable instead.
#[derive(Debug, Clone, Default)]
pub struct ProviderCredentials {
    pub genius_token: Option<String>,
    pub llm_api_key: Option<String>,
}

impl ProviderCredentials {
    pub fn from_env() -> Self {
        ProviderCredentials {
            genius_token: read_env(GENIUS_TOKEN_ENV),
            llm_api_key: read_env(LLM_API_KEY_ENV),
        }
    }
}

fn read_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    // Core settings
    pub port: u16,
    pub metrics_port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub frontend_dir: PathBuf,

    // Provider settings
    pub genius_base_url: String,
    pub lyrics_base_url: String,
    pub llm_base_url: String,
    pub llm_model: String,
    pub llm_temperature: f32,
    pub provider_timeout_sec: u64,
    pub llm_timeout_sec: u64,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let port = file.port.unwrap_or(cli.port);
        let metrics_port = file.metrics_port.unwrap_or(cli.metrics_port);

        let logging_level = file
            .logging_level
            .and_then(|s| parse_logging_level(&s))
            .unwrap_or_else(|| cli.logging_level.clone());

        let frontend_dir = file
            .frontend_dir
            .map(PathBuf::from)
            .unwrap_or_else(|| cli.frontend_dir.clone());

        let genius_base_url = file
            .genius_base_url
            .unwrap_or_else(|| DEFAULT_GENIUS_BASE_URL.to_string());
        let lyrics_base_url = file
            .lyrics_base_url
            .unwrap_or_else(|| DEFAULT_LYRICS_BASE_URL.to_string());
        let llm_base_url = file
            .llm_base_url
            .unwrap_or_else(|| DEFAULT_LLM_BASE_URL.to_string());
        let llm_model = file
            .llm_model
            .unwrap_or_else(|| DEFAULT_LLM_MODEL.to_string());
        let llm_temperature = file.llm_temperature.unwrap_or(0.7);

        let provider_timeout_sec = file.provider_timeout_sec.unwrap_or(cli.provider_timeout_sec);
        let llm_timeout_sec = file.llm_timeout_sec.unwrap_or(cli.llm_timeout_sec);

        Ok(AppConfig {
            port,
            metrics_port,
            logging_level,
            frontend_dir,
            genius_base_url,
            lyrics_base_url,
            llm_base_url,
            llm_model,
            llm_temperature,
            provider_timeout_sec,
            llm_timeout_sec,
        })
    }
}

fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}
