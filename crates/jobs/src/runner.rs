use crate::{ProbeSchedulerJob, StatsPollerJob};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

pub trait SpawnableJob: Send + Sync + 'static {
    const NAME: &'static str;

    fn with_cancellation(self, token: CancellationToken) -> Self;
    fn start_job(self: Arc<Self>) -> JoinHandle<()>;
}

macro_rules! impl_spawnable_job {
    ($t:ty, $name:literal) => {
        impl SpawnableJob for $t {
            const NAME: &'static str = $name;

            fn with_cancellation(self, token: CancellationToken) -> Self {
                self.with_cancellation(token)
            }

            fn start_job(self: Arc<Self>) -> JoinHandle<()> {
                tokio::spawn(async move { self.start().await })
            }
        }
    };
}

impl_spawnable_job!(ProbeSchedulerJob, "probe_scheduler");
impl_spawnable_job!(StatsPollerJob, "stats_poller");

fn spawn_job<J: SpawnableJob>(
    job: Option<J>,
    shutdown: &CancellationToken,
    handles: &mut Vec<(&'static str, JoinHandle<()>)>,
) {
    if let Some(job) = job {
        let job = job.with_cancellation(shutdown.clone());
        handles.push((J::NAME, Arc::new(job).start_job()));
    }
}

pub struct JobRunner {
    probe_scheduler: Option<ProbeSchedulerJob>,
    stats_poller: Option<StatsPollerJob>,
    shutdown: CancellationToken,
}

impl JobRunner {
    pub fn new() -> Self {
        Self {
            probe_scheduler: None,
            stats_poller: None,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_probe_scheduler(mut self, job: ProbeSchedulerJob) -> Self {
        self.probe_scheduler = Some(job);
        self
    }

    pub fn with_stats_poller(mut self, job: StatsPollerJob) -> Self {
        self.stats_poller = Some(job);
        self
    }

    pub fn with_shutdown_token(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    /// Spawns every configured job and returns without waiting on them.
    pub fn start(self) -> RunningJobs {
        info!("Starting background job runner");

        let mut handles = Vec::new();
        spawn_job(self.probe_scheduler, &self.shutdown, &mut handles);
        spawn_job(self.stats_poller, &self.shutdown, &mut handles);

        info!(jobs = handles.len(), "All background jobs started");
        RunningJobs {
            handles,
            shutdown: self.shutdown,
        }
    }
}

impl Default for JobRunner {
    fn default() -> Self {
        Self::new()
    }
}

/// Handles to the jobs started by [`JobRunner::start`].
pub struct RunningJobs {
    handles: Vec<(&'static str, JoinHandle<()>)>,
    shutdown: CancellationToken,
}

impl RunningJobs {
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Cancels all jobs and waits until they exit. Jobs still running when
    /// `grace` elapses are aborted.
    pub async fn shutdown(self, grace: Duration) {
        self.shutdown.cancel();

        let deadline = tokio::time::Instant::now() + grace;
        for (name, mut handle) in self.handles {
            match tokio::time::timeout_at(deadline, &mut handle).await {
                Ok(Ok(())) => info!(job = name, "Job stopped"),
                Ok(Err(e)) => warn!(job = name, error = %e, "Job ended abnormally"),
                Err(_) => {
                    warn!(job = name, "Job did not stop within grace period, aborting");
                    handle.abort();
                }
            }
        }
    }
}
