use super::forwarding::{MessageBuilder, ResponseParser};
use super::transport::{resolve_server_addr, UdpTransport};
use async_trait::async_trait;
use ferrous_sidecar_application::ports::DnsProbePort;
use ferrous_sidecar_domain::{DnsProbeOption, DomainError};
use std::time::{Duration, Instant};
use tracing::debug;

/// Sends probe queries over UDP with hickory-proto wire encoding.
#[derive(Debug, Default, Clone, Copy)]
pub struct HickoryProbeClient;

impl HickoryProbeClient {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DnsProbePort for HickoryProbeClient {
    async fn query(
        &self,
        probe: &DnsProbeOption,
        timeout: Duration,
    ) -> Result<Duration, DomainError> {
        let server_addr = resolve_server_addr(&probe.server).await?;
        let (id, query_bytes) = MessageBuilder::build_query(&probe.name, &probe.record_type)?;

        let start = Instant::now();
        let response_bytes = UdpTransport::new(server_addr)
            .send(&query_bytes, timeout)
            .await?;
        let latency = start.elapsed();

        let response = ResponseParser::parse_reply(&response_bytes, id)?;
        if !response.is_success() {
            return Err(DomainError::ProbeRcode {
                server: probe.server.clone(),
                rcode: ResponseParser::rcode_to_status(response.rcode).to_string(),
            });
        }

        debug!(
            label = %probe.label,
            server = %server_addr,
            answers = response.answers.len(),
            latency_ms = latency.as_millis() as u64,
            "Probe query answered"
        );

        Ok(latency)
    }
}
