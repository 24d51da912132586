use async_trait::async_trait;
use ferrous_sidecar_domain::{DomainError, ResolverStats};

/// Port for reading the local resolver's cache statistics.
#[async_trait]
pub trait ResolverStatsPort: Send + Sync {
    async fn fetch_stats(&self) -> Result<ResolverStats, DomainError>;
}
