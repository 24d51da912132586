#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_sidecar_application::ports::{DnsProbePort, MetricsSinkPort, ResolverStatsPort};
use ferrous_sidecar_application::services::ProbeUnit;
use ferrous_sidecar_domain::{DnsProbeOption, DomainError, ResolverMetric, ResolverStats};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub enum ProbeBehavior {
    Succeed,
    Fail,
    Stall,
    Panic,
}

pub struct MockDnsProbe {
    behavior: ProbeBehavior,
    calls: AtomicU64,
}

impl MockDnsProbe {
    pub fn new(behavior: ProbeBehavior) -> Self {
        Self {
            behavior,
            calls: AtomicU64::new(0),
        }
    }

    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DnsProbePort for MockDnsProbe {
    async fn query(
        &self,
        probe: &DnsProbeOption,
        _timeout: Duration,
    ) -> Result<Duration, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.behavior {
            ProbeBehavior::Succeed => Ok(Duration::from_millis(2)),
            ProbeBehavior::Fail => Err(DomainError::ProbeFailed {
                server: probe.server.clone(),
                reason: "connection refused".to_string(),
            }),
            ProbeBehavior::Stall => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Ok(Duration::from_secs(3600))
            }
            ProbeBehavior::Panic => panic!("probe blew up"),
        }
    }
}

pub fn probe_unit(label: &str, interval_secs: u64, client: Arc<MockDnsProbe>) -> ProbeUnit {
    let option = format!("{},127.0.0.1:53,example.com,{},A", label, interval_secs)
        .parse()
        .unwrap();
    ProbeUnit::new(option, client)
}

pub struct MockStatsSource {
    failing: AtomicBool,
    calls: AtomicU64,
}

impl MockStatsSource {
    pub fn new() -> Self {
        Self {
            failing: AtomicBool::new(false),
            calls: AtomicU64::new(0),
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ResolverStatsPort for MockStatsSource {
    async fn fetch_stats(&self) -> Result<ResolverStats, DomainError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if self.failing.load(Ordering::SeqCst) {
            return Err(DomainError::StatsFetchFailed("unreachable".to_string()));
        }
        Ok([(ResolverMetric::CacheHits, call as f64)].into_iter().collect())
    }
}

#[derive(Default)]
pub struct MockMetricsSink {
    gauges: Mutex<HashMap<String, f64>>,
    counters: Mutex<HashMap<String, u64>>,
}

impl MockMetricsSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gauge(&self, name: &str) -> Option<f64> {
        self.gauges.lock().unwrap().get(name).copied()
    }

    pub fn counter(&self, name: &str) -> u64 {
        self.counters.lock().unwrap().get(name).copied().unwrap_or(0)
    }
}

impl MetricsSinkPort for MockMetricsSink {
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

    fn set_gauge(&self, name: &str, value: f64) {
        self.gauges.lock().unwrap().insert(name.to_string(), value);
    }

    fn increment_counter(&self, name: &str) {
        *self
            .counters
            .lock()
            .unwrap()
            .entry(name.to_string())
            .or_default() += 1;
    }

    fn observe_histogram(&self, _name: &str, _value: f64) {}

    fn encode(&self) -> Result<String, DomainError> {
        Ok(String::new())
    }
}
