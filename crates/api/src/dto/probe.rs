use chrono::SecondsFormat;
use ferrous_sidecar_domain::{DnsProbeOption, ProbeResult};
use serde::{Deserialize, Serialize};

/// Body of `GET /healthcheck/{label}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProbeHealthResponse {
    pub label: String,
    pub server: String,
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub is_ok: bool,
    pub last_check_time: Option<String>,
    pub latency_ms: Option<f64>,
    pub error: Option<String>,
}

impl ProbeHealthResponse {
    pub fn new(option: &DnsProbeOption, result: &ProbeResult) -> Self {
        Self {
            label: option.label.clone(),
            server: option.server.clone(),
            name: option.name.clone(),
            record_type: option.record_type.to_string(),
            is_ok: result.success,
            last_check_time: result
                .last_check_time
                .map(|t| t.to_rfc3339_opts(SecondsFormat::Millis, true)),
            latency_ms: result.latency_ms(),
            error: result.error.clone(),
        }
    }
}
