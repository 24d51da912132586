#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use ferrous_sidecar_api::{create_api_routes, AppState};
use ferrous_sidecar_application::ports::{DnsProbePort, MetricsSinkPort};
use ferrous_sidecar_application::services::{ProbeRegistry, ProbeUnit};
use ferrous_sidecar_domain::{DnsProbeOption, DomainError};
use http_body_util::BodyExt;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tower::ServiceExt;

pub struct FixedProbe(pub Result<Duration, DomainError>);

#[async_trait]
impl DnsProbePort for FixedProbe {
    async fn query(
        &self,
        _probe: &DnsProbeOption,
        _timeout: Duration,
    ) -> Result<Duration, DomainError> {
        self.0.clone()
    }
}

/// Renders a fixed body, or fails when `body` is `None`.
pub struct StaticMetrics {
    pub body: Mutex<Option<String>>,
}

impl StaticMetrics {
    pub fn new(body: &str) -> Self {
        Self {
            body: Mutex::new(Some(body.to_string())),
        }
    }

    pub fn broken() -> Self {
        Self {
            body: Mutex::new(None),
        }
    }
}

impl MetricsSinkPort for StaticMetrics {
    fn register_gauge(&self, _name: &str, _help: &str) -> Result<(), DomainError> {
        Ok(())
    }

    fn register_counter(&self, _name: &str, _help: &str) -> Result<(), DomainError> {
        Ok(())
    }

    fn register_histogram(
        &self,
        _name: &str,
        _help: &str,
        _buckets: &[f64],
    ) -> Result<(), DomainError> {
        Ok(())
    }

    fn set_gauge(&self, _name: &str, _value: f64) {}

    fn increment_counter(&self, _name: &str) {}

    fn observe_histogram(&self, _name: &str, _value: f64) {}

    fn encode(&self) -> Result<String, DomainError> {
        self.body
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| DomainError::Metrics("registry unavailable".to_string()))
    }
}

pub fn unit(probe: &str, outcome: Result<Duration, DomainError>) -> ProbeUnit {
    ProbeUnit::new(probe.parse().unwrap(), Arc::new(FixedProbe(outcome)))
}

pub fn app(
    units: Vec<ProbeUnit>,
    metrics: Arc<dyn MetricsSinkPort>,
) -> (Router, Arc<ProbeRegistry>) {
    let probes = Arc::new(ProbeRegistry::new(units).unwrap());
    let state = AppState {
        probes: Arc::clone(&probes),
        metrics,
    };
    (create_api_routes(state, "/metrics"), probes)
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Option<String>, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get("content-type")
        .map(|v| v.to_str().unwrap().to_string());
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, content_type, String::from_utf8(body.to_vec()).unwrap())
}
