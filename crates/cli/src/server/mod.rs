pub mod signal;
pub mod web;

use crate::di::SidecarServices;
use ferrous_sidecar_api::AppState;
use ferrous_sidecar_domain::SidecarOptions;
use ferrous_sidecar_jobs::{JobRunner, ProbeSchedulerJob, StatsPollerJob};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

pub use signal::shutdown_signal;
pub use web::{bind_web_listener, start_web_server};

/// Runs the sidecar until `shutdown` fires or the metrics server fails.
pub async fn run(
    options: SidecarOptions,
    shutdown: CancellationToken,
    grace: Duration,
) -> anyhow::Result<()> {
    let services = SidecarServices::new(&options)?;
    let listener = bind_web_listener(&options.metrics).await?;

    let probe_scheduler =
        ProbeSchedulerJob::new(services.probes.clone()).with_grace_period(grace);
    let stats_poller = StatsPollerJob::new(
        services.publish_stats.clone(),
        options.dnsmasq.poll_interval(),
    );
    let jobs = JobRunner::new()
        .with_probe_scheduler(probe_scheduler)
        .with_stats_poller(stats_poller)
        .with_shutdown_token(shutdown.clone())
        .start();
    info!(jobs = jobs.len(), "Background jobs started");

    let state = AppState {
        probes: services.probes.clone(),
        metrics: services.metrics.clone(),
    };
    let served = start_web_server(listener, state, &options.metrics.path, shutdown.clone()).await;
    if let Err(e) = &served {
        error!(error = %e, "Metrics server failed");
    }

    shutdown.cancel();
    jobs.shutdown(grace).await;

    served
}
