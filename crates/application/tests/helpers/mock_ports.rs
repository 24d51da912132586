#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_sidecar_application::ports::{DnsProbePort, MetricsSinkPort, ResolverStatsPort};
use ferrous_sidecar_domain::{DnsProbeOption, DomainError, ResolverStats};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum ProbeBehavior {
    Succeed(Duration),
    Fail(DomainError),
    Stall(Duration),
    Panic,
}

pub struct MockDnsProbe {
    behavior: Mutex<ProbeBehavior>,
    call_count: Arc<AtomicU64>,
}

impl MockDnsProbe {
    pub fn new(behavior: ProbeBehavior) -> Self {
        Self {
            behavior: Mutex::new(behavior),
            call_count: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn succeeding() -> Self {
        Self::new(ProbeBehavior::Succeed(Duration::from_millis(3)))
    }

    pub fn failing(error: DomainError) -> Self {
        Self::new(ProbeBehavior::Fail(error))
    }

    pub fn set_behavior(&self, behavior: ProbeBehavior) {
        *self.behavior.lock().unwrap() = behavior;
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DnsProbePort for MockDnsProbe {
    async fn query(
        &self,
        _probe: &DnsProbeOption,
        _timeout: Duration,
    ) -> Result<Duration, DomainError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        let behavior = self.behavior.lock().unwrap().clone();
        match behavior {
            ProbeBehavior::Succeed(latency) => Ok(latency),
            ProbeBehavior::Fail(error) => Err(error),
            ProbeBehavior::Stall(duration) => {
                tokio::time::sleep(duration).await;
                Ok(duration)
            }
            ProbeBehavior::Panic => panic!("mock probe panic"),
        }
    }
}

pub struct MockStatsSource {
    result: Mutex<Result<ResolverStats, DomainError>>,
    call_count: AtomicU64,
}

impl MockStatsSource {
    pub fn new(result: Result<ResolverStats, DomainError>) -> Self {
        Self {
            result: Mutex::new(result),
            call_count: AtomicU64::new(0),
        }
    }

    pub fn set_result(&self, result: Result<ResolverStats, DomainError>) {
        *self.result.lock().unwrap() = result;
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ResolverStatsPort for MockStatsSource {
    async fn fetch_stats(&self) -> Result<ResolverStats, DomainError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.result.lock().unwrap().clone()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Gauge,
    Counter,
    Histogram,
}

#[derive(Default)]
pub struct MockMetricsSink {
    registered: Mutex<HashMap<String, MetricKind>>,
    gauges: Mutex<HashMap<String, f64>>,
    counters: Mutex<HashMap<String, u64>>,
    observations: Mutex<HashMap<String, Vec<f64>>>,
}

impl MockMetricsSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(&self, name: &str) -> Option<MetricKind> {
        self.registered.lock().unwrap().get(name).copied()
    }

    pub fn registered_count(&self) -> usize {
        self.registered.lock().unwrap().len()
    }

    pub fn gauge(&self, name: &str) -> Option<f64> {
        self.gauges.lock().unwrap().get(name).copied()
    }

    pub fn counter(&self, name: &str) -> u64 {
        self.counters.lock().unwrap().get(name).copied().unwrap_or(0)
    }

    pub fn observations(&self, name: &str) -> Vec<f64> {
        self.observations
            .lock()
            .unwrap()
            .get(name)
            .cloned()
            .unwrap_or_default()
    }

    fn register(&self, name: &str, kind: MetricKind) -> Result<(), DomainError> {
        let mut registered = self.registered.lock().unwrap();
        if registered.insert(name.to_string(), kind).is_some() {
            return Err(DomainError::Metrics(format!("duplicate metric {}", name)));
        }
        Ok(())
    }

    fn is_registered(&self, name: &str, kind: MetricKind) -> bool {
        self.kind(name) == Some(kind)
    }
}

impl MetricsSinkPort for MockMetricsSink {
    fn register_gauge(&self, name: &str, _help: &str) -> Result<(), DomainError> {
        self.register(name, MetricKind::Gauge)
    }

    fn register_counter(&self, name: &str, _help: &str) -> Result<(), DomainError> {
        self.register(name, MetricKind::Counter)
    }

    fn register_histogram(
        &self,
        name: &str,
        _help: &str,
        _buckets: &[f64],
    ) -> Result<(), DomainError> {
        self.register(name, MetricKind::Histogram)
    }

    fn set_gauge(&self, name: &str, value: f64) {
        if self.is_registered(name, MetricKind::Gauge) {
            self.gauges.lock().unwrap().insert(name.to_string(), value);
        }
    }

    fn increment_counter(&self, name: &str) {
        if self.is_registered(name, MetricKind::Counter) {
            *self
                .counters
                .lock()
                .unwrap()
                .entry(name.to_string())
                .or_default() += 1;
        }
    }

    fn observe_histogram(&self, name: &str, value: f64) {
        if self.is_registered(name, MetricKind::Histogram) {
            self.observations
                .lock()
                .unwrap()
                .entry(name.to_string())
                .or_default()
                .push(value);
        }
    }

    fn encode(&self) -> Result<String, DomainError> {
        let gauges = self.gauges.lock().unwrap();
        let mut lines: Vec<String> = gauges.iter().map(|(k, v)| format!("{} {}", k, v)).collect();
        lines.sort();
        Ok(lines.join("\n"))
    }
}
