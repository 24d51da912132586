use dashmap::DashMap;
use ferrous_sidecar_application::ports::MetricsSinkPort;
use ferrous_sidecar_domain::DomainError;
use prometheus::{
    Encoder, Gauge, Histogram, HistogramOpts, IntCounter, Opts, Registry, TextEncoder,
};
use tracing::debug;

/// [`MetricsSinkPort`] backed by a private `prometheus::Registry`.
pub struct PrometheusMetricsSink {
    registry: Registry,
    gauges: DashMap<String, Gauge>,
    counters: DashMap<String, IntCounter>,
    histograms: DashMap<String, Histogram>,
}

impl PrometheusMetricsSink {
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
            gauges: DashMap::new(),
            counters: DashMap::new(),
            histograms: DashMap::new(),
        }
    }

    fn metrics_error(name: &str, e: prometheus::Error) -> DomainError {
        DomainError::Metrics(format!("{}: {}", name, e))
    }
}

impl Default for PrometheusMetricsSink {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsSinkPort for PrometheusMetricsSink {
    fn register_gauge(&self, name: &str, help: &str) -> Result<(), DomainError> {
        let gauge = Gauge::with_opts(Opts::new(name, help))
            .map_err(|e| Self::metrics_error(name, e))?;
        self.registry
            .register(Box::new(gauge.clone()))
            .map_err(|e| Self::metrics_error(name, e))?;
        self.gauges.insert(name.to_string(), gauge);
        debug!(metric = name, "Gauge registered");
        Ok(())
    }

    fn register_counter(&self, name: &str, help: &str) -> Result<(), DomainError> {
        let counter = IntCounter::with_opts(Opts::new(name, help))
            .map_err(|e| Self::metrics_error(name, e))?;
        self.registry
            .register(Box::new(counter.clone()))
            .map_err(|e| Self::metrics_error(name, e))?;
        self.counters.insert(name.to_string(), counter);
        debug!(metric = name, "Counter registered");
        Ok(())
    }

    fn register_histogram(
        &self,
        name: &str,
        help: &str,
        buckets: &[f64],
    ) -> Result<(), DomainError> {
        let opts = HistogramOpts::new(name, help).buckets(buckets.to_vec());
        let histogram = Histogram::with_opts(opts).map_err(|e| Self::metrics_error(name, e))?;
        self.registry
            .register(Box::new(histogram.clone()))
            .map_err(|e| Self::metrics_error(name, e))?;
        self.histograms.insert(name.to_string(), histogram);
        debug!(metric = name, "Histogram registered");
        Ok(())
    }

    fn set_gauge(&self, name: &str, value: f64) {
        if let Some(gauge) = self.gauges.get(name) {
            gauge.set(value);
        }
    }

    fn increment_counter(&self, name: &str) {
        if let Some(counter) = self.counters.get(name) {
            counter.inc();
        }
    }

    fn observe_histogram(&self, name: &str, value: f64) {
        if let Some(histogram) = self.histograms.get(name) {
            histogram.observe(value);
        }
    }

    fn encode(&self) -> Result<String, DomainError> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder
            .encode(&self.registry.gather(), &mut buffer)
            .map_err(|e| DomainError::Metrics(format!("failed to encode metrics: {}", e)))?;
        String::from_utf8(buffer)
            .map_err(|e| DomainError::Metrics(format!("metrics are not UTF-8: {}", e)))
    }
}
