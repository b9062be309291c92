//! Prometheus metrics for the HTTP service.
//!
//! Each [`ServiceMetrics`] owns its own registry, so separate application
//! instances (and tests) never share counters.
use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts, Registry, TextEncoder,
};
use std::time::Duration;

const REQUEST_LABELS: &[&str] = &["method", "route", "status_code"];
const DURATION_BUCKETS: &[f64] = &[0.1, 0.3, 0.5, 0.7, 1.0, 3.0, 5.0, 7.0, 10.0];

#[derive(Clone)]
pub struct ServiceMetrics {
    registry: Registry,
    http_requests_total: IntCounterVec,
    http_request_duration_seconds: HistogramVec,
    active_transactions: IntGauge,
}

impl ServiceMetrics {
    pub fn new() -> prometheus::Result<Self> {
        let registry = Registry::new();

        let http_requests_total = IntCounterVec::new(
            Opts::new("http_requests_total", "Total number of HTTP requests processed"),
            REQUEST_LABELS,
        )?;
        let http_request_duration_seconds = HistogramVec::new(
            HistogramOpts::new(
                "http_request_duration_seconds",
                "Duration of HTTP requests in seconds",
            )
            .buckets(DURATION_BUCKETS.to_vec()),
            REQUEST_LABELS,
        )?;
        let active_transactions = IntGauge::new(
            "active_transactions_count",
            "Number of transactions inside the statistics window at the last statistics query",
        )?;

        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;
        registry.register(Box::new(active_transactions.clone()))?;

        Ok(Self {
            registry,
            http_requests_total,
            http_request_duration_seconds,
            active_transactions,
        })
    }

    pub fn observe_request(&self, method: &str, route: &str, status_code: u16, elapsed: Duration) {
        let status = status_code.to_string();
        let labels = [method, route, status.as_str()];
        self.http_requests_total.with_label_values(&labels).inc();
        self.http_request_duration_seconds
            .with_label_values(&labels)
            .observe(elapsed.as_secs_f64());
    }

    pub fn set_active_transactions(&self, count: u64) {
        self.active_transactions
            .set(i64::try_from(count).unwrap_or(i64::MAX));
    }

    /// Prometheus text exposition of every registered metric.
    pub fn render(&self) -> prometheus::Result<String> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }

    pub fn content_type(&self) -> String {
        TextEncoder::new().format_type().to_string()
    }
}

/// Route label for requests that did not match a registered route.
///
/// Numeric path segments are collapsed to `:id` to bound label cardinality.
pub fn normalize_route(path: &str) -> String {
    path.split('/')
        .map(|segment| {
            if !segment.is_empty() && segment.chars().all(|c| c.is_ascii_digit()) {
                ":id"
            } else {
                segment
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}
