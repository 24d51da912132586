use chrono::{DateTime, Utc};
use std::time::Duration;

pub const PENDING_PROBE_ERROR: &str = "no probe result yet";

/// Outcome of the most recent query issued by a probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    /// `None` until the probe has run once.
    pub last_check_time: Option<DateTime<Utc>>,
    pub success: bool,
    pub latency: Option<Duration>,
    pub error: Option<String>,
}

impl ProbeResult {
    pub fn pending() -> Self {
        Self {
            last_check_time: None,
            success: false,
            latency: None,
            error: Some(PENDING_PROBE_ERROR.to_string()),
        }
    }

    pub fn success(checked_at: DateTime<Utc>, latency: Duration) -> Self {
        Self {
            last_check_time: Some(checked_at),
            success: true,
            latency: Some(latency),
            error: None,
        }
    }

    pub fn failure(checked_at: DateTime<Utc>, error: impl Into<String>) -> Self {
        Self {
            last_check_time: Some(checked_at),
            success: false,
            latency: None,
            error: Some(error.into()),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.last_check_time.is_none()
    }

    pub fn latency_ms(&self) -> Option<f64> {
        self.latency.map(|l| l.as_secs_f64() * 1000.0)
    }
}

impl Default for ProbeResult {
    fn default() -> Self {
        Self::pending()
    }
}
