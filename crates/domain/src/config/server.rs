use serde::{Deserialize, Serialize};

/// Where the metrics and health check listener binds.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MetricsServerConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_path")]
    pub path: String,

    /// Prefix prepended to every exported metric name.
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

impl Default for MetricsServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_port(),
            path: default_path(),
            namespace: default_namespace(),
        }
    }
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    10054
}

fn default_path() -> String {
    "/metrics".to_string()
}

fn default_namespace() -> String {
    "kubedns".to_string()
}
