use thiserror::Error;

/// A semantically invalid [`ResolverConfig`](super::ResolverConfig).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("invalid federation domain for '{name}': {reason}")]
    InvalidFederationDomain { name: String, reason: String },

    #[error("invalid stub domain '{domain}': {reason}")]
    InvalidStubDomain { domain: String, reason: String },

    #[error("invalid nameserver '{address}' for stub domain '{domain}': {reason}")]
    InvalidStubServerAddress {
        domain: String,
        address: String,
        reason: String,
    },

    #[error("{count} upstream nameservers configured, at most {max} are allowed")]
    TooManyUpstreamServers { count: usize, max: usize },

    #[error("invalid upstream nameserver '{address}': {reason}")]
    InvalidUpstreamAddress { address: String, reason: String },

    #[error("nameserver '{address}' must be an IP address, not a domain name, in node-local cache mode")]
    UpstreamMustBeIpNotFqdn { address: String },
}
