use ferrous_sidecar_application::services::{ProbeRegistry, ProbeUnit};
use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

pub const DEFAULT_SHUTDOWN_GRACE: Duration = Duration::from_secs(2);

/// Runs every registered probe on its own interval, one task per probe.
///
/// A slow or failing probe never delays another: each loop only waits on
/// its own timer and its own query.
pub struct ProbeSchedulerJob {
    registry: Arc<ProbeRegistry>,
    grace: Duration,
    shutdown: CancellationToken,
}

impl ProbeSchedulerJob {
    pub fn new(registry: Arc<ProbeRegistry>) -> Self {
        Self {
            registry,
            grace: DEFAULT_SHUTDOWN_GRACE,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_grace_period(mut self, grace: Duration) -> Self {
        self.grace = grace;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    /// Spawns the probe loops and waits for cancellation, then drains them
    /// for at most the grace period before aborting the rest.
    pub async fn start(self: Arc<Self>) {
        info!(probes = self.registry.len(), "Starting probe scheduler");

        let mut tasks = JoinSet::new();
        for unit in self.registry.units() {
            tasks.spawn(run_probe_loop(Arc::clone(unit), self.shutdown.clone()));
        }

        self.shutdown.cancelled().await;
        info!("ProbeSchedulerJob: shutting down");

        let drained = tokio::time::timeout(self.grace, async {
            while let Some(result) = tasks.join_next().await {
                if let Err(e) = result {
                    if e.is_panic() {
                        error!(error = %e, "Probe loop panicked");
                    }
                }
            }
        })
        .await;

        if drained.is_err() {
            warn!(
                remaining = tasks.len(),
                grace_ms = self.grace.as_millis() as u64,
                "Probe loops still running after grace period, aborting"
            );
            tasks.abort_all();
        }
    }
}

async fn run_probe_loop(unit: Arc<ProbeUnit>, shutdown: CancellationToken) {
    let mut interval = tokio::time::interval(unit.option().interval);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    info!(
        label = %unit.label(),
        server = %unit.option().server,
        name = %unit.option().name,
        record_type = %unit.option().record_type,
        interval_secs = unit.option().interval.as_secs(),
        "Probe started"
    );

    loop {
        tokio::select! {
            _ = shutdown.cancelled() => break,
            _ = interval.tick() => {
                tokio::select! {
                    _ = shutdown.cancelled() => break,
                    outcome = AssertUnwindSafe(unit.run_once()).catch_unwind() => {
                        if outcome.is_err() {
                            error!(label = %unit.label(), "Probe tick panicked");
                        }
                    }
                }
            }
        }
    }

    info!(label = %unit.label(), "Probe stopped");
}
