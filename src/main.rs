use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, level_filters::LevelFilter, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use temilyrics_server::config::{
    AppConfig, CliConfig, FileConfig, ProviderCredentials, GENIUS_TOKEN_ENV, LLM_API_KEY_ENV,
};
use temilyrics_server::genius::GeniusClient;
use temilyrics_server::interpret::llm::{CompletionOptions, OpenAIProvider};
use temilyrics_server::interpret::Interpreter;
use temilyrics_server::lyrics::{LrcLibSource, LyricsSource};
use temilyrics_server::server::{self, run_server, RequestsLoggingLevel, ServerConfig};

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to a TOML config file. Values in the file override CLI flags.
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// The port to listen on.
    #[clap(short, long, default_value_t = 3001)]
    pub port: u16,

    /// The port for the metrics server (Prometheus scraping).
    #[clap(long, default_value_t = 9092)]
    pub metrics_port: u16,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// Path to the frontend directory to be statically served.
    #[clap(long, default_value = "frontend")]
    pub frontend_dir: PathBuf,

    /// Timeout in seconds for search and lyrics provider requests.
    #[clap(long, default_value_t = 30)]
    pub provider_timeout_sec: u64,

    /// Timeout in seconds for completion provider requests.
    #[clap(long, default_value_t = 120)]
    pub llm_timeout_sec: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .unwrap();

    let file_config = cli_args
        .config
        .as_deref()
        .map(FileConfig::load)
        .transpose()?;

    let cli_config = CliConfig {
        port: cli_args.port,
        metrics_port: cli_args.metrics_port,
        logging_level: cli_args.logging_level,
        frontend_dir: cli_args.frontend_dir,
        provider_timeout_sec: cli_args.provider_timeout_sec,
        llm_timeout_sec: cli_args.llm_timeout_sec,
    };

    let config = AppConfig::resolve(&cli_config, file_config)?;
    let credentials = ProviderCredentials::from_env();

    server::metrics::init_metrics();

    let provider_timeout = Duration::from_secs(config.provider_timeout_sec);

    let genius = match &credentials.genius_token {
        Some(token) => Some(Arc::new(GeniusClient::new(
            config.genius_base_url.as_str(),
            token.as_str(),
            provider_timeout,
        )?)),
        None => {
            warn!(
                "{} is not set, song search and id-based lyrics lookup are disabled",
                GENIUS_TOKEN_ENV
            );
            None
        }
    };

    let lyrics: Arc<dyn LyricsSource> = Arc::new(LrcLibSource::new(
        config.lyrics_base_url.as_str(),
        provider_timeout,
    )?);

    let interpreter = match &credentials.llm_api_key {
        Some(api_key) => {
            let provider = OpenAIProvider::new(
                config.llm_base_url.as_str(),
                config.llm_model.as_str(),
                Some(api_key.clone()),
            );
            let options = CompletionOptions {
                temperature: config.llm_temperature,
                max_tokens: None,
                timeout: Duration::from_secs(config.llm_timeout_sec),
            };
            Some(Arc::new(Interpreter::new(Arc::new(provider), options)))
        }
        None => {
            warn!(
                "{} is not set, lyric interpretation is disabled",
                LLM_API_KEY_ENV
            );
            None
        }
    };

    if config.frontend_dir.is_dir() {
        info!("Serving frontend from {:?}", config.frontend_dir);
    } else {
        info!(
            "Frontend directory {:?} not found, serving status page only",
            config.frontend_dir
        );
    }

    let server_config = ServerConfig {
        requests_logging_level: config.logging_level.clone(),
        port: config.port,
        metrics_port: config.metrics_port,
        frontend_dir: Some(config.frontend_dir.clone()),
    };

    run_server(server_config, genius, lyrics, interpreter).await
}
