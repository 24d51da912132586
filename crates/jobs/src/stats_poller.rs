use ferrous_sidecar_application::use_cases::PublishResolverStatsUseCase;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

pub struct StatsPollerJob {
    publish: Arc<PublishResolverStatsUseCase>,
    interval: Duration,
    shutdown: CancellationToken,
}

impl StatsPollerJob {
    pub fn new(publish: Arc<PublishResolverStatsUseCase>, interval: Duration) -> Self {
        Self {
            publish,
            interval,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            interval_ms = self.interval.as_millis() as u64,
            "Starting resolver stats poller"
        );

        let mut interval = tokio::time::interval(self.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    info!("StatsPollerJob: shutting down");
                    break;
                }
                _ = interval.tick() => {
                    tokio::select! {
                        _ = self.shutdown.cancelled() => {
                            info!("StatsPollerJob: shutting down");
                            break;
                        }
                        result = self.publish.execute() => {
                            match result {
                                Ok(stats) => debug!(metrics = stats.len(), "Resolver stats polled"),
                                Err(e) => warn!(error = %e, "Failed to poll resolver stats"),
                            }
                        }
                    }
                }
            }
        }
    }
}
