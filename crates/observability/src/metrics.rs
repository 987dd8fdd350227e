//! Prometheus metrics infrastructure
//!
//! Services record metrics through the `metrics` facade
//! (`metrics::counter!("orders_created_total")` and friends); this module
//! only installs the exporter that serves them.

use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;

/// Initialize the Prometheus metrics exporter
///
/// Starts an HTTP listener on the given port exposing metrics at
/// `/metrics`.
pub fn init_metrics(port: u16) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("0.0.0.0:{}", port).parse()?;

    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()?;

    tracing::info!(%addr, "Metrics server listening");
    Ok(())
}
