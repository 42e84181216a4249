//! Request logging middleware

use super::super::metrics::{record_error, record_http_request};
use super::super::state::ServerState;
use axum::extract::State;
use axum::{
    body::{Body, Bytes},
    http::{HeaderMap, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{info, warn};

/// How much of each request to log. Levels are cumulative.
#[derive(PartialEq, PartialOrd, Clone, Debug, Default, clap::ValueEnum)]
pub enum RequestsLoggingLevel {
    None,
    #[default]
    Path,
    Headers,
    Body,
}

impl std::fmt::Display for RequestsLoggingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Bodies above this size are summarized instead of logged.
const MAX_LOGGABLE_BODY_LENGTH: usize = 1024;

fn content_length(headers: &HeaderMap) -> Option<usize> {
    headers
        .get(axum::http::header::CONTENT_LENGTH)?
        .to_str()
        .ok()?
        .parse()
        .ok()
}

fn log_headers(headers: &HeaderMap) {
    for (name, value) in headers.iter() {
        info!("    {}: {:?}", name, value);
    }
}

async fn log_request_body(request: Request<Body>) -> Result<Request<Body>, axum::Error> {
    match content_length(request.headers()) {
        None => {
            info!("  Req Body: unknown size, not logged");
            Ok(request)
        }
        Some(size) if size >= MAX_LOGGABLE_BODY_LENGTH => {
            info!(
                "  Req Body: too big to log ({:#})",
                byte_unit::Byte::from(size)
            );
            Ok(request)
        }
        Some(size) => {
            let (parts, body) = request.into_parts();
            let bytes: Bytes = axum::body::to_bytes(body, size).await?;
            info!("  Req Body:\n{}", String::from_utf8_lossy(&bytes));
            Ok(Request::from_parts(parts, Body::from(bytes)))
        }
    }
}

pub async fn log_requests(
    State(state): State<ServerState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let level = state.config.requests_logging_level.clone();

    let start = Instant::now();
    let method = request.method().to_string();
    let uri = request.uri().to_string();
    let path = request.uri().path().to_string();

    if level > RequestsLoggingLevel::None {
        info!(">>> {} {}", method, uri);
    }
    if level >= RequestsLoggingLevel::Headers {
        info!("  Req Headers:");
        log_headers(request.headers());
    }
    if level >= RequestsLoggingLevel::Body {
        request = match log_request_body(request).await {
            Ok(request) => request,
            Err(err) => {
                warn!("Failed to read request body: {:?}", err);
                return Response::builder()
                    .status(500)
                    .body(Body::from("Internal Server Error"))
                    .unwrap();
            }
        };
    }

    let response = next.run(request).await;

    if level >= RequestsLoggingLevel::Headers {
        info!("  Resp Headers:");
        log_headers(response.headers());
    }

    let status = response.status().as_u16();
    let duration = start.elapsed();

    if level > RequestsLoggingLevel::None {
        info!("<<< {} ({}ms)", status, duration.as_millis());
    }

    record_http_request(&method, &path, status, duration);
    match status {
        400..=499 => record_error("client_error", &path),
        500..=599 => record_error("server_error", &path),
        _ => {}
    }

    response
}
