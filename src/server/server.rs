use anyhow::Result;
use std::time::Duration;

use tower_http::services::ServeDir;
use tracing::info;

use axum::{
    extract::State,
    middleware,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;

use super::interpret::make_interpret_routes;
use super::lyrics::make_lyrics_routes;
use super::metrics::metrics_handler;
use super::search::make_search_routes;
use super::state::*;
use super::{log_requests, ServerConfig};

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub hash: String,
    pub search_configured: bool,
    pub interpreter_configured: bool,
    pub lyrics_source: String,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

async fn status(State(state): State<ServerState>) -> impl IntoResponse {
    let stats = ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        hash: state.hash.clone(),
        search_configured: state.genius.is_some(),
        interpreter_configured: state.interpreter.is_some(),
        lyrics_source: state.lyrics.name().to_string(),
    };
    Json(stats)
}

pub fn make_app(
    config: ServerConfig,
    genius: OptionalGeniusClient,
    lyrics: GuardedLyricsSource,
    interpreter: OptionalInterpreter,
) -> Router {
    let state = ServerState::new(config.clone(), genius, lyrics, interpreter);

    let api_routes: Router = Router::new()
        .route("/status", get(status))
        .with_state(state.clone())
        .merge(make_search_routes(state.clone()))
        .merge(make_lyrics_routes(state.clone()))
        .merge(make_interpret_routes(state.clone()));

    let home_router: Router = match config.frontend_dir.filter(|dir| dir.is_dir()) {
        Some(frontend_dir) => {
            let static_files_service =
                ServeDir::new(frontend_dir).append_index_html_on_directories(true);
            Router::new().fallback_service(static_files_service)
        }
        None => Router::new()
            .route("/", get(status))
            .with_state(state.clone()),
    };

    home_router
        .nest("/api", api_routes)
        .layer(middleware::from_fn_with_state(state, log_requests))
}

pub async fn run_server(
    config: ServerConfig,
    genius: OptionalGeniusClient,
    lyrics: GuardedLyricsSource,
    interpreter: OptionalInterpreter,
) -> Result<()> {
    let port = config.port;
    let metrics_port = config.metrics_port;
    let app = make_app(config, genius, lyrics, interpreter);

    let metrics_app: Router = Router::new().route("/metrics", get(metrics_handler));
    let metrics_listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", metrics_port)).await?;
    tokio::spawn(async move {
        if let Err(err) = axum::serve(metrics_listener, metrics_app).await {
            tracing::error!("Metrics server failed: {}", err);
        }
    });

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;
    info!("Ready to serve at port {}!", port);
    info!("Metrics available at port {}!", metrics_port);

    Ok(axum::serve(listener, app).await?)
}
