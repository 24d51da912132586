pub mod probe_scheduler;
pub mod runner;
pub mod stats_poller;

pub use probe_scheduler::{ProbeSchedulerJob, DEFAULT_SHUTDOWN_GRACE};
pub use runner::{JobRunner, RunningJobs};
pub use stats_poller::StatsPollerJob;
