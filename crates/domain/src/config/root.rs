use serde::{Deserialize, Serialize};

use super::dnsmasq::DnsmasqConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::MetricsServerConfig;
use crate::probe::{DnsProbeOption, ProbeOptionsBuilder};

/// Path prefix under which each probe's health check is exported.
pub const HEALTHCHECK_PATH_PREFIX: &str = "/healthcheck/";

/// Everything the sidecar needs to run.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SidecarOptions {
    /// Local dnsmasq stats endpoint
    #[serde(default)]
    pub dnsmasq: DnsmasqConfig,

    /// Metrics and health check listener
    #[serde(default)]
    pub metrics: MetricsServerConfig,

    /// DNS probes, in the order they were configured
    #[serde(default)]
    pub probes: Vec<DnsProbeOption>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SidecarOptions {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dnsmasq.poll_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "dnsmasq poll interval cannot be 0".to_string(),
            ));
        }

        if !self.metrics.path.starts_with('/') {
            return Err(ConfigError::Validation(format!(
                "metrics path '{}' must start with '/'",
                self.metrics.path
            )));
        }

        if self.metrics.path.starts_with(HEALTHCHECK_PATH_PREFIX) {
            return Err(ConfigError::Validation(format!(
                "metrics path '{}' collides with {}",
                self.metrics.path, HEALTHCHECK_PATH_PREFIX
            )));
        }

        let mut builder = ProbeOptionsBuilder::new();
        for probe in &self.probes {
            builder
                .push(probe.clone())
                .map_err(|e| ConfigError::Validation(e.to_string()))?;
        }

        Ok(())
    }
}
