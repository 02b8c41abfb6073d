use once_cell::sync::Lazy;
use prometheus::{
    register_int_counter, register_int_counter_vec, Encoder, IntCounter, IntCounterVec, TextEncoder,
};

// Prometheus metrics (default registry)
pub static LOCATION_UPDATES_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "bus_tracker_location_updates_total",
        "Total accepted location updates"
    )
    .expect("register location_updates_total")
});

pub static LOCATION_UPDATE_FAILURES_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "bus_tracker_location_update_failures_total",
        "Total location updates rejected or failed"
    )
    .expect("register location_update_failures_total")
});

pub static LOCATION_LOOKUPS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "bus_tracker_location_lookups_total",
        "Location lookups by outcome",
        &["outcome"]
    )
    .expect("register location_lookups_total")
});

pub fn record_lookup(outcome: &str) {
    LOCATION_LOOKUPS_TOTAL.with_label_values(&[outcome]).inc();
}

pub fn encode_metrics() -> (axum::http::StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (
        axum::http::StatusCode::OK,
        String::from_utf8(buffer).unwrap_or_default(),
    )
}
