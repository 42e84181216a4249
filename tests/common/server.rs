//! Test server lifecycle management
//!
//! Each test gets an isolated app instance on a random port, wired to its
//! own set of mock upstream providers.

use super::providers::{MockBehavior, MockProviders};
use std::sync::Arc;
use std::time::Duration;
use temilyrics_server::genius::GeniusClient;
use temilyrics_server::interpret::llm::{CompletionOptions, OpenAIProvider};
use temilyrics_server::interpret::Interpreter;
use temilyrics_server::lyrics::{LrcLibSource, LyricsSource};
use temilyrics_server::server::{make_app, RequestsLoggingLevel, ServerConfig};
use tokio::net::TcpListener;

const PROVIDER_TIMEOUT: Duration = Duration::from_secs(5);

/// Test server instance wired to mock providers
///
/// Dropping the instance shuts the server down (the shutdown channel
/// closes); mock provider tasks die with the test runtime.
pub struct TestServer {
    /// Base URL for making requests (e.g., "http://127.0.0.1:12345")
    pub base_url: String,

    /// Mock upstream providers, exposing per-provider hit counters
    pub providers: MockProviders,

    _shutdown_tx: tokio::sync::oneshot::Sender<()>,
}

impl TestServer {
    /// Spawn a server whose providers all answer successfully.
    pub async fn spawn() -> Self {
        Self::spawn_with(MockBehavior::default()).await
    }

    /// Spawn a server with scripted provider behavior.
    pub async fn spawn_with(behavior: MockBehavior) -> Self {
        Self::build(behavior, true, true).await
    }

    /// Spawn a server with no provider credentials configured.
    ///
    /// Mock providers still run so tests can assert they are never called.
    pub async fn spawn_unconfigured() -> Self {
        Self::build(MockBehavior::default(), false, false).await
    }

    async fn build(behavior: MockBehavior, with_genius: bool, with_interpreter: bool) -> Self {
        let providers = MockProviders::spawn(behavior).await;

        let genius = if with_genius {
            Some(Arc::new(
                GeniusClient::new(
                    providers.genius_base_url.as_str(),
                    "test-token",
                    PROVIDER_TIMEOUT,
                )
                .expect("Failed to build Genius client"),
            ))
        } else {
            None
        };

        let lyrics: Arc<dyn LyricsSource> = Arc::new(
            LrcLibSource::new(providers.lyrics_base_url.as_str(), PROVIDER_TIMEOUT)
                .expect("Failed to build lyrics source"),
        );

        let interpreter = if with_interpreter {
            let provider = OpenAIProvider::new(
                providers.llm_base_url.as_str(),
                "test-model",
                Some("test-key".to_string()),
            );
            let options = CompletionOptions {
                temperature: 0.7,
                max_tokens: None,
                timeout: PROVIDER_TIMEOUT,
            };
            Some(Arc::new(Interpreter::new(Arc::new(provider), options)))
        } else {
            None
        };

        let config = ServerConfig {
            requests_logging_level: RequestsLoggingLevel::None,
            port: 0,
            metrics_port: 0,
            frontend_dir: None,
        };

        let app = make_app(config, genius, lyrics, interpreter);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let port = listener.local_addr().expect("No local addr").port();

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
                .expect("Test server failed");
        });

        TestServer {
            base_url: format!("http://127.0.0.1:{}", port),
            providers,
            _shutdown_tx: shutdown_tx,
        }
    }
}
