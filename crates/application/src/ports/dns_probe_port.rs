use async_trait::async_trait;
use ferrous_sidecar_domain::{DnsProbeOption, DomainError};
use std::time::Duration;

/// Port for sending a single health check query.
#[async_trait]
pub trait DnsProbePort: Send + Sync {
    /// Sends one query of `probe.record_type` for `probe.name` to
    /// `probe.server` and returns the round-trip latency.
    ///
    /// Any rcode other than NOERROR is an error.
    async fn query(&self, probe: &DnsProbeOption, timeout: Duration)
        -> Result<Duration, DomainError>;
}
