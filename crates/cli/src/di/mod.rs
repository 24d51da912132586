use ferrous_sidecar_application::ports::{DnsProbePort, MetricsSinkPort};
use ferrous_sidecar_application::services::{ProbeRegistry, ProbeUnit};
use ferrous_sidecar_application::use_cases::PublishResolverStatsUseCase;
use ferrous_sidecar_domain::{DomainError, SidecarOptions};
use ferrous_sidecar_infrastructure::dns::HickoryProbeClient;
use ferrous_sidecar_infrastructure::dnsmasq::DnsmasqStatsClient;
use ferrous_sidecar_infrastructure::metrics::PrometheusMetricsSink;
use std::sync::Arc;
use tracing::info;

/// Everything the jobs and the HTTP surface share, built once at startup.
pub struct SidecarServices {
    pub metrics: Arc<PrometheusMetricsSink>,
    pub probes: Arc<ProbeRegistry>,
    pub publish_stats: Arc<PublishResolverStatsUseCase>,
}

impl SidecarServices {
    pub fn new(options: &SidecarOptions) -> Result<Self, DomainError> {
        let metrics = Arc::new(PrometheusMetricsSink::new());
        let sink: Arc<dyn MetricsSinkPort> = metrics.clone();
        let namespace = options.metrics.namespace.as_str();

        let client: Arc<dyn DnsProbePort> = Arc::new(HickoryProbeClient::new());
        let units = options
            .probes
            .iter()
            .map(|option| {
                ProbeUnit::new(option.clone(), client.clone()).with_metrics(sink.clone(), namespace)
            })
            .collect::<Result<Vec<_>, _>>()?;
        let probes = Arc::new(ProbeRegistry::new(units)?);

        let stats_client = Arc::new(DnsmasqStatsClient::from_config(&options.dnsmasq));
        let publish_stats = Arc::new(PublishResolverStatsUseCase::new(
            stats_client,
            sink,
            namespace,
        )?);

        info!(
            probes = probes.len(),
            dnsmasq = %options.dnsmasq.server(),
            namespace,
            "Services initialized"
        );

        Ok(Self {
            metrics,
            probes,
            publish_stats,
        })
    }
}
