//! Metrics collection and exposition.
//!
//! # Metrics
//! - `proxy_requests_total` (counter): requests by shape and status
//! - `proxy_request_duration_seconds` (histogram): time to response headers, by shape
//! - `proxy_upstream_errors_total` (counter): network faults talking to GitHub, by shape
//!
//! # Design Decisions
//! - Rejected requests are labelled with shape `none`
//! - Duration stops when headers are ready; the streamed body is not timed

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Instant;

/// Install the Prometheus recorder and its scrape endpoint.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_request(shape: &'static str, status: u16, start: Instant) {
    counter!("proxy_requests_total", "shape" => shape, "status" => status.to_string()).increment(1);
    histogram!("proxy_request_duration_seconds", "shape" => shape).record(start.elapsed().as_secs_f64());
}

pub fn record_upstream_error(shape: &'static str) {
    counter!("proxy_upstream_errors_total", "shape" => shape).increment(1);
}
