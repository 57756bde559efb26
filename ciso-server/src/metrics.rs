//! Prometheus metrics collection for the dashboard server
//!
//! `/metrics` on the public router is the dashboard bundle, so the
//! Prometheus exporter gets its own listener (see [`init_prometheus`]).

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Instant;

/// Initialize all metric descriptions
pub fn init_metrics() {
    describe_counter!("ciso_requests_total", "Total number of HTTP requests");
    describe_counter!("ciso_faults_total", "Total number of requests answered with a fault");
    describe_counter!("ciso_incident_draws_total", "Total number of incident counts drawn");
    describe_histogram!("ciso_request_latency_seconds", "HTTP request latency in seconds");
}

/// Install the Prometheus recorder with an HTTP listener on `addr`
pub fn init_prometheus(addr: SocketAddr) -> anyhow::Result<()> {
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()?;
    Ok(())
}

/// Record a completed request
pub fn record_request(endpoint: &str, status: u16, latency_seconds: f64) {
    counter!(
        "ciso_requests_total",
        1,
        "endpoint" => endpoint.to_string(),
        "status" => status.to_string()
    );
    histogram!(
        "ciso_request_latency_seconds",
        latency_seconds,
        "endpoint" => endpoint.to_string()
    );
}

/// Record a fault surfaced to the caller
pub fn record_fault(kind: &str) {
    counter!("ciso_faults_total", 1, "kind" => kind.to_string());
}

/// Record incident counts drawn from the random stream
pub fn record_incident_draws(count: usize) {
    counter!("ciso_incident_draws_total", count as u64);
}

/// Middleware recording count and latency per matched route.
///
/// Install with `route_layer` so [`MatchedPath`] is populated.
pub async fn track_requests(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let endpoint = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());

    let response = next.run(req).await;

    record_request(
        &endpoint,
        response.status().as_u16(),
        start.elapsed().as_secs_f64(),
    );
    response
}
