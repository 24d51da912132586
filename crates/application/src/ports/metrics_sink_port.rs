use ferrous_sidecar_domain::DomainError;

/// Histogram buckets for query latencies, in milliseconds.
pub const LATENCY_MS_BUCKETS: &[f64] = &[
    1.0, 2.0, 5.0, 10.0, 20.0, 50.0, 100.0, 200.0, 500.0, 1000.0, 2000.0, 5000.0,
];

/// Port for the pull-based metrics registry.
///
/// Metrics are registered once by name; updates to a name that was never
/// registered are ignored.
pub trait MetricsSinkPort: Send + Sync {
    fn register_gauge(&self, name: &str, help: &str) -> Result<(), DomainError>;

    fn register_counter(&self, name: &str, help: &str) -> Result<(), DomainError>;

    fn register_histogram(&self, name: &str, help: &str, buckets: &[f64])
        -> Result<(), DomainError>;

    fn set_gauge(&self, name: &str, value: f64);

    fn increment_counter(&self, name: &str);

    fn observe_histogram(&self, name: &str, value: f64);

    /// Renders every registered metric in the exposition text format.
    fn encode(&self) -> Result<String, DomainError>;
}

/// Joins the non-empty parts with `_`, e.g. `kubedns_dnsmasq_hits`.
pub fn metric_name(namespace: &str, subsystem: &str, name: &str) -> String {
    [namespace, subsystem, name]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("_")
}
