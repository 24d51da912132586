//! Ferrous Sidecar Domain Layer
pub mod config;
pub mod errors;
pub mod probe;
pub mod probe_result;
pub mod resolver_stats;
pub mod syntax;

pub use config::{
    ConfigError, ConfigValidationError, DnsmasqConfig, LoggingConfig, MetricsServerConfig,
    ResolverConfig, SidecarOptions,
};
pub use config::root::HEALTHCHECK_PATH_PREFIX;
pub use errors::DomainError;
pub use probe::{DnsProbeOption, ProbeOptionsBuilder, ProbeRecordType};
pub use probe_result::{ProbeResult, PENDING_PROBE_ERROR};
pub use resolver_stats::{ResolverMetric, ResolverStats};
pub use syntax::DomainNameMode;
