use ferrous_sidecar_application::ports::MetricsSinkPort;
use ferrous_sidecar_application::services::ProbeRegistry;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub probes: Arc<ProbeRegistry>,
    pub metrics: Arc<dyn MetricsSinkPort>,
}
