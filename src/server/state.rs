use axum::extract::FromRef;

use crate::genius::GeniusClient;
use crate::interpret::Interpreter;
use crate::lyrics::LyricsSource;
use std::sync::Arc;
use std::time::Instant;

use super::ServerConfig;

pub type OptionalGeniusClient = Option<Arc<GeniusClient>>;
pub type GuardedLyricsSource = Arc<dyn LyricsSource>;
pub type OptionalInterpreter = Option<Arc<Interpreter>>;

/// Shared application state passed to all route handlers.
///
/// Adapters that need a credential are optional: when the credential is
/// absent at startup the adapter is not constructed, and its endpoint
/// reports the missing configuration instead of calling out.
#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub genius: OptionalGeniusClient,
    pub lyrics: GuardedLyricsSource,
    pub interpreter: OptionalInterpreter,
    pub hash: String,
}

impl ServerState {
    pub fn new(
        config: ServerConfig,
        genius: OptionalGeniusClient,
        lyrics: GuardedLyricsSource,
        interpreter: OptionalInterpreter,
    ) -> ServerState {
        ServerState {
            config,
            start_time: Instant::now(),
            genius,
            lyrics,
            interpreter,
            hash: env!("GIT_HASH").to_string(),
        }
    }
}

impl FromRef<ServerState> for OptionalGeniusClient {
    fn from_ref(input: &ServerState) -> Self {
        input.genius.clone()
    }
}

impl FromRef<ServerState> for GuardedLyricsSource {
    fn from_ref(input: &ServerState) -> Self {
        input.lyrics.clone()
    }
}

impl FromRef<ServerState> for OptionalInterpreter {
    fn from_ref(input: &ServerState) -> Self {
        input.interpreter.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
