use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::errors::ConfigError;
use super::validation::ConfigValidationError;
use crate::syntax::{
    is_ip_literal, validate_domain_name, validate_server_address, DomainNameMode,
};
use crate::DomainError;

/// Upstream resolver fan-out limit.
pub const MAX_UPSTREAM_NAMESERVERS: usize = 3;

/// Upstream nameservers, stub domains and federations served by the
/// supervised resolver.
///
/// Maps are ordered so validation visits keys deterministically; the empty
/// stub domain (catch-all) always comes first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolverConfig {
    /// Federation name → domain suffix.
    #[serde(default)]
    pub federations: BTreeMap<String, String>,

    /// Domain (or `""` for the catch-all) → nameservers for that domain.
    #[serde(default)]
    pub stub_domains: BTreeMap<String, Vec<String>>,

    #[serde(default)]
    pub upstream_nameservers: Vec<String>,
}

fn reason(error: DomainError) -> String {
    match error {
        DomainError::InvalidDomainName { reason, .. }
        | DomainError::InvalidServerAddress { reason, .. } => reason,
        other => other.to_string(),
    }
}

impl ResolverConfig {
    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_json(&contents)
    }

    /// Returns the first violation found, checking federations, then stub
    /// domains, then upstream nameservers.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.violations().into_iter().next().map_or(Ok(()), Err)
    }

    /// Collects every violation instead of stopping at the first one.
    pub fn validate_all(&self) -> Result<(), Vec<ConfigValidationError>> {
        let violations = self.violations();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }

    /// Rules for a resolver backing a node-local cache: every nameserver must
    /// be an IP literal. Independent of [`Self::validate`]; callers that want
    /// both run both.
    pub fn validate_node_local_cache(&self) -> Result<(), ConfigValidationError> {
        let stub_addresses = self.stub_domains.values().flatten();
        match stub_addresses
            .chain(self.upstream_nameservers.iter())
            .find(|address| !is_ip_literal(address))
        {
            Some(address) => Err(ConfigValidationError::UpstreamMustBeIpNotFqdn {
                address: address.clone(),
            }),
            None => Ok(()),
        }
    }

    fn violations(&self) -> Vec<ConfigValidationError> {
        let mut violations = Vec::new();

        for (name, domain) in &self.federations {
            if let Err(e) = validate_domain_name(domain, DomainNameMode::Fqdn) {
                violations.push(ConfigValidationError::InvalidFederationDomain {
                    name: name.clone(),
                    reason: reason(e),
                });
            }
        }

        for (domain, servers) in &self.stub_domains {
            if !domain.is_empty() {
                if let Err(e) = validate_domain_name(domain, DomainNameMode::Fqdn) {
                    violations.push(ConfigValidationError::InvalidStubDomain {
                        domain: domain.clone(),
                        reason: reason(e),
                    });
                }
            }
            for address in servers {
                if let Err(e) = validate_server_address(address) {
                    violations.push(ConfigValidationError::InvalidStubServerAddress {
                        domain: domain.clone(),
                        address: address.clone(),
                        reason: reason(e),
                    });
                }
            }
        }

        if self.upstream_nameservers.len() > MAX_UPSTREAM_NAMESERVERS {
            violations.push(ConfigValidationError::TooManyUpstreamServers {
                count: self.upstream_nameservers.len(),
                max: MAX_UPSTREAM_NAMESERVERS,
            });
        }
        for address in &self.upstream_nameservers {
            if let Err(e) = validate_server_address(address) {
                violations.push(ConfigValidationError::InvalidUpstreamAddress {
                    address: address.clone(),
                    reason: reason(e),
                });
            }
        }

        violations
    }
}
