use clap::Parser;
use ferrous_sidecar_domain::{
    ConfigError, DnsProbeOption, DomainError, ProbeOptionsBuilder, SidecarOptions,
};
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "ferrous-sidecar")]
#[command(version)]
#[command(about = "Ferrous Sidecar - DNS probes, dnsmasq stats and Prometheus export")]
pub struct Cli {
    /// Address that the dnsmasq server is listening on
    #[arg(long, value_name = "ADDR")]
    pub dnsmasq_addr: Option<String>,

    /// Port that the dnsmasq server is listening on
    #[arg(long, value_name = "PORT")]
    pub dnsmasq_port: Option<u16>,

    /// Interval with which to poll dnsmasq for stats, in milliseconds
    #[arg(long, value_name = "MS")]
    pub dnsmasq_poll_interval_ms: Option<u64>,

    /// Probe the given DNS server with the DNS name and export probe metrics
    /// and a health check URI. Specified as
    /// <label>,<server>,<dns name>[,<interval_seconds>][,<type>], e.g.
    /// 'mydns,127.0.0.1:53,example.com,10,A'. May be repeated.
    #[arg(long = "probe", value_name = "PROBE", value_parser = parse_probe)]
    pub probes: Vec<DnsProbeOption>,

    /// HTTP address to bind the metrics server to
    #[arg(long, value_name = "ADDR")]
    pub prometheus_addr: Option<String>,

    /// HTTP port used to export Prometheus metrics
    #[arg(long, value_name = "PORT")]
    pub prometheus_port: Option<u16>,

    /// HTTP path used to export metrics
    #[arg(long, value_name = "PATH")]
    pub prometheus_path: Option<String>,

    /// Prometheus metric namespace
    #[arg(long, value_name = "NAMESPACE")]
    pub prometheus_namespace: Option<String>,

    /// Resolver configuration (JSON) to validate at startup
    #[arg(long, value_name = "FILE")]
    pub resolver_config: Option<String>,

    /// Apply the node-local cache rules when validating --resolver-config
    #[arg(long, requires = "resolver_config")]
    pub node_local_cache: bool,

    /// How long background jobs get to stop after a shutdown signal
    #[arg(long, value_name = "MS", default_value_t = 2000)]
    pub shutdown_grace_ms: u64,

    /// Log level or filter directive (trace, debug, info, warn, error).
    /// Falls back to RUST_LOG, then info.
    #[arg(long)]
    pub log_level: Option<String>,
}

fn parse_probe(value: &str) -> Result<DnsProbeOption, String> {
    value.parse().map_err(|e: DomainError| e.to_string())
}

impl Cli {
    pub fn to_options(&self) -> Result<SidecarOptions, ConfigError> {
        let mut options = SidecarOptions::default();

        if let Some(address) = &self.dnsmasq_addr {
            options.dnsmasq.address = address.clone();
        }
        if let Some(port) = self.dnsmasq_port {
            options.dnsmasq.port = port;
        }
        if let Some(interval_ms) = self.dnsmasq_poll_interval_ms {
            options.dnsmasq.poll_interval_ms = interval_ms;
        }

        if let Some(address) = &self.prometheus_addr {
            options.metrics.bind_address = address.clone();
        }
        if let Some(port) = self.prometheus_port {
            options.metrics.port = port;
        }
        if let Some(path) = &self.prometheus_path {
            options.metrics.path = path.clone();
        }
        if let Some(namespace) = &self.prometheus_namespace {
            options.metrics.namespace = namespace.clone();
        }

        let mut probes = ProbeOptionsBuilder::new();
        for probe in &self.probes {
            probes
                .push(probe.clone())
                .map_err(|e| ConfigError::Validation(e.to_string()))?;
        }
        options.probes = probes.build();

        if let Some(level) = self
            .log_level
            .clone()
            .or_else(|| std::env::var("RUST_LOG").ok())
        {
            options.logging.level = level;
        }

        options.validate()?;
        Ok(options)
    }

    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_millis(self.shutdown_grace_ms)
    }
}
