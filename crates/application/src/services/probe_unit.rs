use crate::ports::{metric_name, DnsProbePort, MetricsSinkPort, LATENCY_MS_BUCKETS};
use arc_swap::ArcSwap;
use chrono::Utc;
use ferrous_sidecar_domain::{DnsProbeOption, DomainError, ProbeResult};
use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

struct ProbeMetrics {
    sink: Arc<dyn MetricsSinkPort>,
    errors: String,
    latency_ms: String,
}

/// Clears the in-flight flag when the query finishes or is dropped.
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// One periodically checked (server, name, type) tuple and its latest result.
///
/// The result lives in a single slot: every completed query replaces it
/// wholesale and readers always see a complete snapshot.
pub struct ProbeUnit {
    option: DnsProbeOption,
    timeout: Duration,
    client: Arc<dyn DnsProbePort>,
    metrics: Option<ProbeMetrics>,
    result: ArcSwap<ProbeResult>,
    in_flight: AtomicBool,
}

impl ProbeUnit {
    pub fn new(option: DnsProbeOption, client: Arc<dyn DnsProbePort>) -> Self {
        Self {
            timeout: option.timeout(),
            option,
            client,
            metrics: None,
            result: ArcSwap::from_pointee(ProbeResult::pending()),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Overrides the query timeout. Never exceeds the default for the
    /// probe's interval.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout.min(self.option.timeout());
        self
    }

    /// Registers `<namespace>_probe_<label>_errors` and
    /// `<namespace>_probe_<label>_latency_ms`.
    pub fn with_metrics(
        mut self,
        sink: Arc<dyn MetricsSinkPort>,
        namespace: &str,
    ) -> Result<Self, DomainError> {
        let subsystem = format!("probe_{}", self.option.label);
        let errors = metric_name(namespace, &subsystem, "errors");
        let latency_ms = metric_name(namespace, &subsystem, "latency_ms");

        sink.register_counter(
            &errors,
            &format!("Number of failed probes to {}", self.option.server),
        )?;
        sink.register_histogram(
            &latency_ms,
            &format!("Latency of probes to {} in milliseconds", self.option.server),
            LATENCY_MS_BUCKETS,
        )?;

        self.metrics = Some(ProbeMetrics {
            sink,
            errors,
            latency_ms,
        });
        Ok(self)
    }

    pub fn label(&self) -> &str {
        &self.option.label
    }

    pub fn option(&self) -> &DnsProbeOption {
        &self.option
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn latest(&self) -> Arc<ProbeResult> {
        self.result.load_full()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Issues one query and records its outcome.
    ///
    /// Returns `None` without querying when a previous call is still in
    /// flight.
    pub async fn run_once(&self) -> Option<Arc<ProbeResult>> {
        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            debug!(label = %self.option.label, "Probe still in flight, skipping tick");
            return None;
        };

        let query = AssertUnwindSafe(self.client.query(&self.option, self.timeout)).catch_unwind();
        let outcome = tokio::time::timeout(self.timeout, query).await;

        let checked_at = self.next_check_time();
        let result = match outcome {
            Ok(Ok(Ok(latency))) => ProbeResult::success(checked_at, latency),
            Ok(Ok(Err(e))) => ProbeResult::failure(checked_at, e.to_string()),
            Ok(Err(_)) => ProbeResult::failure(checked_at, "probe query panicked"),
            Err(_) => ProbeResult::failure(
                checked_at,
                DomainError::ProbeTimeout {
                    server: self.option.server.clone(),
                    timeout_ms: self.timeout.as_millis() as u64,
                }
                .to_string(),
            ),
        };

        Some(self.record(result))
    }

    fn next_check_time(&self) -> chrono::DateTime<Utc> {
        let now = Utc::now();
        match self.result.load().last_check_time {
            Some(previous) if previous > now => previous,
            _ => now,
        }
    }

    fn record(&self, result: ProbeResult) -> Arc<ProbeResult> {
        let result = Arc::new(result);
        let previous = self.result.swap(Arc::clone(&result));

        if result.success {
            debug!(
                label = %self.option.label,
                latency_ms = result.latency_ms().unwrap_or_default(),
                "Probe OK"
            );
            if !previous.success {
                info!(label = %self.option.label, server = %self.option.server, "Probe healthy");
            }
        } else {
            warn!(
                label = %self.option.label,
                server = %self.option.server,
                error = result.error.as_deref().unwrap_or_default(),
                "Probe failed"
            );
        }

        if let Some(metrics) = &self.metrics {
            match result.latency_ms() {
                Some(latency_ms) if result.success => {
                    metrics.sink.observe_histogram(&metrics.latency_ms, latency_ms)
                }
                _ => metrics.sink.increment_counter(&metrics.errors),
            }
        }

        result
    }
}
