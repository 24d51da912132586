pub mod udp;

use ferrous_sidecar_domain::DomainError;
use std::net::SocketAddr;

pub use udp::UdpTransport;

/// Resolves `host:port` to a socket address. IP literals skip the lookup.
pub async fn resolve_server_addr(server: &str) -> Result<SocketAddr, DomainError> {
    if let Ok(addr) = server.parse::<SocketAddr>() {
        return Ok(addr);
    }

    let failed = |reason: String| DomainError::ProbeFailed {
        server: server.to_string(),
        reason,
    };

    tokio::net::lookup_host(server)
        .await
        .map_err(|e| failed(format!("failed to resolve server address: {}", e)))?
        .next()
        .ok_or_else(|| failed("server address resolved to nothing".to_string()))
}
