pub mod healthcheck;
pub mod metrics;

pub use healthcheck::get_probe_health;
pub use metrics::get_metrics;
