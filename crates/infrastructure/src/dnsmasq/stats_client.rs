use crate::dns::forwarding::{DnsResponse, MessageBuilder, ResponseParser};
use crate::dns::transport::{resolve_server_addr, UdpTransport};
use async_trait::async_trait;
use ferrous_sidecar_application::ports::ResolverStatsPort;
use ferrous_sidecar_domain::probe::probe_timeout;
use ferrous_sidecar_domain::{DnsmasqConfig, DomainError, ResolverMetric, ResolverStats};
use std::time::Duration;
use tracing::{debug, warn};

/// Reads dnsmasq cache counters through its CHAOS-class TXT interface
/// (`cachesize.bind.`, `hits.bind.`, ...).
pub struct DnsmasqStatsClient {
    server: String,
    timeout: Duration,
}

impl DnsmasqStatsClient {
    pub fn new(server: impl Into<String>, timeout: Duration) -> Self {
        Self {
            server: server.into(),
            timeout,
        }
    }

    /// The query timeout follows the poll interval the same way a probe's
    /// follows its own.
    pub fn from_config(config: &DnsmasqConfig) -> Self {
        Self::new(config.server(), probe_timeout(config.poll_interval()))
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn extract_stats(&self, response: &DnsResponse) -> Result<ResolverStats, DomainError> {
        if !response.is_success() {
            return Err(DomainError::StatsFetchFailed(format!(
                "{} returned {}",
                self.server,
                ResponseParser::rcode_to_status(response.rcode)
            )));
        }

        let mut stats = ResolverStats::new();
        for (name, text) in response.txt_answers() {
            let Some(metric) = ResolverMetric::from_query_name(&name) else {
                debug!(name = %name, "Ignoring unexpected TXT answer");
                continue;
            };
            match text.trim().parse::<f64>() {
                Ok(value) => stats.insert(metric, value),
                Err(_) => warn!(metric = %metric, value = %text, "Non-numeric dnsmasq statistic"),
            }
        }

        if stats.is_empty() {
            return Err(DomainError::StatsFetchFailed(format!(
                "{} returned no statistics",
                self.server
            )));
        }
        Ok(stats)
    }
}

#[async_trait]
impl ResolverStatsPort for DnsmasqStatsClient {
    async fn fetch_stats(&self) -> Result<ResolverStats, DomainError> {
        let fetch = async {
            let server_addr = resolve_server_addr(&self.server).await?;
            let (id, query_bytes) = MessageBuilder::build_stats_query()?;
            let response_bytes = UdpTransport::new(server_addr)
                .send(&query_bytes, self.timeout)
                .await?;
            ResponseParser::parse_reply(&response_bytes, id)
        };

        let response = fetch.await.map_err(|e| match e {
            DomainError::StatsFetchFailed(_) => e,
            other => DomainError::StatsFetchFailed(other.to_string()),
        })?;

        self.extract_stats(&response)
    }
}
