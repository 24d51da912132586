pub mod dnsmasq;
pub mod errors;
pub mod logging;
pub mod resolver;
pub mod root;
pub mod server;
pub mod validation;

pub use dnsmasq::DnsmasqConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use resolver::{ResolverConfig, MAX_UPSTREAM_NAMESERVERS};
pub use root::SidecarOptions;
pub use server::MetricsServerConfig;
pub use validation::ConfigValidationError;
