//! Prometheus metrics

use ::metrics::{counter, gauge};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;

const UPSTREAM_REQUESTS: &str = "ticker_relay_upstream_requests_total";
const UPSTREAM_ERRORS: &str = "ticker_relay_upstream_errors_total";
const FEED_UPDATES: &str = "ticker_relay_feed_updates_total";
const FEED_PARSE_ERRORS: &str = "ticker_relay_feed_parse_errors_total";
const FEED_RECONNECTS: &str = "ticker_relay_feed_reconnects_total";
const CACHED_SYMBOLS: &str = "ticker_relay_cached_symbols";

/// Start the Prometheus scrape endpoint on `0.0.0.0:port`
///
/// Must be called from within a tokio runtime.
pub fn init_metrics(port: u16) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| anyhow::anyhow!("Failed to start metrics exporter: {}", e))?;

    tracing::info!(%addr, "Prometheus exporter listening");
    Ok(())
}

/// Count one outbound ticker request (`endpoint` is "all" or "one")
pub fn record_upstream_request(endpoint: &'static str) {
    counter!(UPSTREAM_REQUESTS, "endpoint" => endpoint).increment(1);
}

/// Count one failed ticker request by error kind
pub fn record_upstream_error(kind: &'static str) {
    counter!(UPSTREAM_ERRORS, "kind" => kind).increment(1);
}

pub fn record_feed_update() {
    counter!(FEED_UPDATES).increment(1);
}

pub fn record_feed_parse_error() {
    counter!(FEED_PARSE_ERRORS).increment(1);
}

pub fn record_feed_reconnect() {
    counter!(FEED_RECONNECTS).increment(1);
}

/// Number of symbols currently held in the ticker cache
pub fn set_cached_symbols(count: usize) {
    gauge!(CACHED_SYMBOLS).set(count as f64);
}
