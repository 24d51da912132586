use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Location of the local dnsmasq instance and how often its stats are polled.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsmasqConfig {
    #[serde(default = "default_address")]
    pub address: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

impl DnsmasqConfig {
    pub fn server(&self) -> String {
        if self.address.contains(':') && !self.address.starts_with('[') {
            format!("[{}]:{}", self.address, self.port)
        } else {
            format!("{}:{}", self.address, self.port)
        }
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

impl Default for DnsmasqConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            port: default_port(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

fn default_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    53
}

fn default_poll_interval_ms() -> u64 {
    5000
}
