mod dns_probe_port;
mod metrics_sink_port;
mod resolver_stats_port;

pub use dns_probe_port::DnsProbePort;
pub use metrics_sink_port::{metric_name, MetricsSinkPort, LATENCY_MS_BUCKETS};
pub use resolver_stats_port::ResolverStatsPort;
