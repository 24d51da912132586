use ferrous_sidecar_domain::ResolverConfig;
use tracing::{error, info};

/// Loads and validates a resolver configuration file. Any violation aborts
/// startup.
pub fn load_resolver_config(path: &str, node_local_cache: bool) -> anyhow::Result<ResolverConfig> {
    let config = ResolverConfig::from_file(path)?;

    let validated = config.validate().and_then(|()| {
        if node_local_cache {
            config.validate_node_local_cache()
        } else {
            Ok(())
        }
    });
    if let Err(e) = validated {
        error!(path, error = %e, "Invalid resolver configuration");
        return Err(e.into());
    }

    info!(
        path,
        node_local_cache,
        federations = config.federations.len(),
        stub_domains = config.stub_domains.len(),
        upstream_nameservers = config.upstream_nameservers.len(),
        "Resolver configuration validated"
    );

    Ok(config)
}
