//! Prometheus metrics for the HTTP surface and outbound provider calls.

use axum::{http::StatusCode, response::IntoResponse};
use lazy_static::lazy_static;
use prometheus::{
    core::Collector, CounterVec, Encoder, Gauge, HistogramOpts, HistogramVec, Opts, Registry,
    TextEncoder,
};
use std::time::Duration;

const PREFIX: &str = "temilyrics";

lazy_static! {
    pub static ref REGISTRY: Registry = Registry::new();

    pub static ref HTTP_REQUESTS_TOTAL: CounterVec = CounterVec::new(
        Opts::new(format!("{PREFIX}_http_requests_total"), "Total number of HTTP requests"),
        &["method", "path", "status"]
    ).expect("Failed to create http_requests_total metric");

    pub static ref HTTP_REQUEST_DURATION_SECONDS: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            format!("{PREFIX}_http_request_duration_seconds"),
            "HTTP request duration in seconds"
        )
        .buckets(vec![0.001, 0.01, 0.05, 0.1, 0.5, 1.0, 2.0, 5.0, 10.0, 30.0]),
        &["method", "path"]
    ).expect("Failed to create http_request_duration_seconds metric");

    pub static ref PROVIDER_REQUESTS_TOTAL: CounterVec = CounterVec::new(
        Opts::new(format!("{PREFIX}_provider_requests_total"), "Outbound provider requests"),
        &["provider", "outcome"]
    ).expect("Failed to create provider_requests_total metric");

    pub static ref PROVIDER_REQUEST_DURATION_SECONDS: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            format!("{PREFIX}_provider_request_duration_seconds"),
            "Outbound provider request duration in seconds"
        )
        .buckets(vec![0.05, 0.1, 0.5, 1.0, 2.0, 5.0, 10.0, 30.0, 60.0, 120.0]),
        &["provider"]
    ).expect("Failed to create provider_request_duration_seconds metric");

    pub static ref ERRORS_TOTAL: CounterVec = CounterVec::new(
        Opts::new(format!("{PREFIX}_errors_total"), "Total errors by kind and path"),
        &["kind", "path"]
    ).expect("Failed to create errors_total metric");

    pub static ref PROCESS_MEMORY_BYTES: Gauge = Gauge::new(
        format!("{PREFIX}_process_memory_bytes"),
        "Process memory usage in bytes"
    ).expect("Failed to create process_memory_bytes metric");
}

/// Register all metrics with the global registry.
///
/// Double registration is ignored so tests can call this repeatedly.
pub fn init_metrics() {
    let collectors: Vec<Box<dyn Collector>> = vec![
        Box::new(HTTP_REQUESTS_TOTAL.clone()),
        Box::new(HTTP_REQUEST_DURATION_SECONDS.clone()),
        Box::new(PROVIDER_REQUESTS_TOTAL.clone()),
        Box::new(PROVIDER_REQUEST_DURATION_SECONDS.clone()),
        Box::new(ERRORS_TOTAL.clone()),
        Box::new(PROCESS_MEMORY_BYTES.clone()),
    ];
    for collector in collectors {
        let _ = REGISTRY.register(collector);
    }

    tracing::info!("Metrics system initialized");
}

pub fn record_http_request(method: &str, path: &str, status: u16, duration: Duration) {
    HTTP_REQUESTS_TOTAL
        .with_label_values(&[method, path, &status.to_string()])
        .inc();
    HTTP_REQUEST_DURATION_SECONDS
        .with_label_values(&[method, path])
        .observe(duration.as_secs_f64());
}

pub fn record_provider_request(provider: &str, ok: bool, duration: Duration) {
    let outcome = if ok { "ok" } else { "error" };
    PROVIDER_REQUESTS_TOTAL
        .with_label_values(&[provider, outcome])
        .inc();
    PROVIDER_REQUEST_DURATION_SECONDS
        .with_label_values(&[provider])
        .observe(duration.as_secs_f64());
}

pub fn record_error(kind: &str, path: &str) {
    ERRORS_TOTAL.with_label_values(&[kind, path]).inc();
}

/// Resident set size from /proc.
#[cfg(target_os = "linux")]
fn resident_memory_bytes() -> Option<f64> {
    let status = std::fs::read_to_string("/proc/self/status").ok()?;
    let line = status.lines().find(|l| l.starts_with("VmRSS:"))?;
    let kb: f64 = line.split_whitespace().nth(1)?.parse().ok()?;
    Some(kb * 1024.0)
}

/// The gauge stays unset on platforms without /proc.
#[cfg(not(target_os = "linux"))]
fn resident_memory_bytes() -> Option<f64> {
    None
}

/// Handler for the /metrics endpoint
pub async fn metrics_handler() -> impl IntoResponse {
    if let Some(bytes) = resident_memory_bytes() {
        PROCESS_MEMORY_BYTES.set(bytes);
    }

    let mut buffer = vec![];
    match TextEncoder::new().encode(&REGISTRY.gather(), &mut buffer) {
        Ok(()) => (
            StatusCode::OK,
            String::from_utf8(buffer).unwrap_or_default(),
        ),
        Err(e) => {
            tracing::error!("Failed to encode metrics: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to encode metrics: {}", e),
            )
        }
    }
}
