//! Metrics collection for tournament-service.

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use prometheus::{IntCounterVec, Opts, Registry};
use std::sync::OnceLock;

pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();
pub static PROMETHEUS_REGISTRY: OnceLock<Registry> = OnceLock::new();
pub static TOURNAMENT_CREATED_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();
pub static TOURNAMENT_JOINS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();

/// Initialize metrics collection.
pub fn init_metrics() {
    let builder = PrometheusBuilder::new();
    let handle = builder
        .install_recorder()
        .expect("failed to install Prometheus recorder");

    if METRICS_HANDLE.set(handle).is_err() {
        panic!("failed to set metrics handle: already initialized");
    }

    let registry = Registry::new();

    let created_counter = IntCounterVec::new(
        Opts::new(
            "tournament_created_total",
            "Total tournaments created, by sport",
        ),
        &["sport"],
    )
    .expect("Failed to create tournament_created_total metric");

    let joins_counter = IntCounterVec::new(
        Opts::new(
            "tournament_joins_total",
            "Total successful tournament joins, by sport",
        ),
        &["sport"],
    )
    .expect("Failed to create tournament_joins_total metric");

    registry
        .register(Box::new(created_counter.clone()))
        .expect("Failed to register tournament_created_total");
    registry
        .register(Box::new(joins_counter.clone()))
        .expect("Failed to register tournament_joins_total");

    PROMETHEUS_REGISTRY
        .set(registry)
        .expect("Failed to set prometheus registry");
    TOURNAMENT_CREATED_TOTAL
        .set(created_counter)
        .expect("Failed to set tournament_created_total");
    TOURNAMENT_JOINS_TOTAL
        .set(joins_counter)
        .expect("Failed to set tournament_joins_total");
}

/// Get metrics output in Prometheus text format.
pub fn get_metrics() -> String {
    let mut output = METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized\n".to_string());

    if let Some(registry) = PROMETHEUS_REGISTRY.get() {
        use prometheus::Encoder;
        let encoder = prometheus::TextEncoder::new();
        let metric_families = registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer).ok();
        if let Ok(custom_metrics) = String::from_utf8(buffer) {
            output.push_str(&custom_metrics);
        }
    }

    output
}

/// No-op until `init_metrics` has run, so library consumers and tests that
/// never install a recorder stay quiet.
pub fn record_tournament_created(sport: &str) {
    if let Some(counter) = TOURNAMENT_CREATED_TOTAL.get() {
        counter.with_label_values(&[sport]).inc();
    }
}

pub fn record_tournament_join(sport: &str) {
    if let Some(counter) = TOURNAMENT_JOINS_TOTAL.get() {
        counter.with_label_values(&[sport]).inc();
    }
}
