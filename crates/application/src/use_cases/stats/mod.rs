mod publish_resolver_stats;

pub use publish_resolver_stats::{PublishResolverStatsUseCase, DNSMASQ_SUBSYSTEM};
