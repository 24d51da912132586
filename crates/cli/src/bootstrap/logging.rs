use ferrous_sidecar_domain::LoggingConfig;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

pub fn init_logging(config: &LoggingConfig) {
    let (filter, fallback) = match EnvFilter::try_new(&config.level) {
        Ok(filter) => (filter, false),
        Err(_) => (EnvFilter::new("info"), true),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true)
        .with_ansi(true)
        .init();

    if fallback {
        warn!(level = %config.level, "Invalid log level, using info");
    } else {
        info!("Logging initialized at level: {}", config.level);
    }
}
