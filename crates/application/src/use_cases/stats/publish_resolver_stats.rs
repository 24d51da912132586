use crate::ports::{metric_name, MetricsSinkPort, ResolverStatsPort};
use ferrous_sidecar_domain::{DomainError, ResolverMetric, ResolverStats};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

pub const DNSMASQ_SUBSYSTEM: &str = "dnsmasq";

/// Use case: copy one snapshot of resolver statistics into the metrics sink.
///
/// A failed fetch only bumps the error counter; gauges keep their last
/// published value.
pub struct PublishResolverStatsUseCase {
    source: Arc<dyn ResolverStatsPort>,
    sink: Arc<dyn MetricsSinkPort>,
    gauges: BTreeMap<ResolverMetric, String>,
    errors_metric: String,
}

impl PublishResolverStatsUseCase {
    pub fn new(
        source: Arc<dyn ResolverStatsPort>,
        sink: Arc<dyn MetricsSinkPort>,
        namespace: &str,
    ) -> Result<Self, DomainError> {
        let mut gauges = BTreeMap::new();
        for metric in ResolverMetric::ALL {
            let name = metric_name(namespace, DNSMASQ_SUBSYSTEM, metric.metric_name());
            sink.register_gauge(&name, metric.help())?;
            gauges.insert(metric, name);
        }

        let errors_metric = metric_name(namespace, DNSMASQ_SUBSYSTEM, "errors");
        sink.register_counter(&errors_metric, "Number of errors polling dnsmasq")?;

        Ok(Self {
            source,
            sink,
            gauges,
            errors_metric,
        })
    }

    pub fn gauge_name(&self, metric: ResolverMetric) -> Option<&str> {
        self.gauges.get(&metric).map(String::as_str)
    }

    pub fn errors_metric(&self) -> &str {
        &self.errors_metric
    }

    pub async fn execute(&self) -> Result<ResolverStats, DomainError> {
        let stats = match self.source.fetch_stats().await {
            Ok(stats) => stats,
            Err(e) => {
                self.sink.increment_counter(&self.errors_metric);
                return Err(e);
            }
        };

        for (metric, value) in stats.iter() {
            if let Some(name) = self.gauges.get(&metric) {
                self.sink.set_gauge(name, value);
            }
        }

        debug!(metrics = stats.len(), "Resolver stats published");
        Ok(stats)
    }
}
