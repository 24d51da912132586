use crate::config::ConfigValidationError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name '{name}': {reason}")]
    InvalidDomainName { name: String, reason: String },

    #[error("Invalid server address '{address}': {reason}")]
    InvalidServerAddress { address: String, reason: String },

    #[error("Invalid probe label '{0}': label must be of format ^[a-zA-Z0-9_]+$")]
    InvalidProbeLabel(String),

    #[error("Invalid format to --probe: {0}")]
    InvalidProbeFormat(String),

    #[error("Invalid probe interval '{0}': expected a positive number of seconds")]
    InvalidProbeInterval(String),

    #[error("Invalid type for DNS: {0}")]
    UnsupportedRecordType(String),

    #[error("Duplicate probe label: {0}")]
    DuplicateProbeLabel(String),

    #[error(transparent)]
    ConfigValidation(#[from] ConfigValidationError),

    #[error("Probe not found: {0}")]
    ProbeNotFound(String),

    #[error("Query to {server} timed out after {timeout_ms}ms")]
    ProbeTimeout { server: String, timeout_ms: u64 },

    #[error("Query to {server} failed: {reason}")]
    ProbeFailed { server: String, reason: String },

    #[error("Query to {server} returned {rcode}")]
    ProbeRcode { server: String, rcode: String },

    #[error("Malformed DNS message: {0}")]
    MalformedMessage(String),

    #[error("Failed to fetch resolver stats: {0}")]
    StatsFetchFailed(String),

    #[error("Metrics error: {0}")]
    Metrics(String),
}
