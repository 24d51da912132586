//! Syntax checks for DNS domain names and nameserver addresses.
//!
//! These are pure functions: they never mutate their input, never log and
//! report every problem as a [`DomainError`].

use crate::DomainError;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

pub const DEFAULT_DNS_PORT: u16 = 53;

const MAX_DOMAIN_LENGTH: usize = 253;
const MAX_LABEL_LENGTH: usize = 63;

/// How strictly [`validate_domain_name`] treats its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainNameMode {
    /// One or more labels of `[a-zA-Z0-9_-]`. Used for probe names and hosts.
    Relaxed,
    /// Two or more labels of `[a-zA-Z0-9-]`. Used for federation and stub domains.
    Fqdn,
}

pub fn validate_domain_name(name: &str, mode: DomainNameMode) -> Result<(), DomainError> {
    let invalid = |reason: &str| DomainError::InvalidDomainName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    let trimmed = name.strip_suffix('.').unwrap_or(name);
    if trimmed.is_empty() {
        return Err(invalid("domain cannot be empty"));
    }
    if trimmed.len() > MAX_DOMAIN_LENGTH {
        return Err(invalid("domain cannot exceed 253 characters"));
    }

    let mut label_count = 0;
    for label in trimmed.split('.') {
        if label.is_empty() {
            return Err(invalid("empty label"));
        }
        if label.len() > MAX_LABEL_LENGTH {
            return Err(invalid("label cannot exceed 63 characters"));
        }
        let allowed = |c: char| {
            c.is_ascii_alphanumeric() || c == '-' || (c == '_' && mode == DomainNameMode::Relaxed)
        };
        if !label.chars().all(allowed) {
            return Err(invalid(match mode {
                DomainNameMode::Relaxed => "labels must match [a-zA-Z0-9_-]+",
                DomainNameMode::Fqdn => "labels must match [a-zA-Z0-9-]+",
            }));
        }
        label_count += 1;
    }

    if mode == DomainNameMode::Fqdn && label_count < 2 {
        return Err(invalid("domain must contain at least two labels"));
    }

    Ok(())
}

/// Splits `host:port` / `[ipv6]:port` into its parts. Bare hosts and bare
/// IPv6 literals come back with `None` as port string.
fn split_host_port(address: &str) -> Result<(&str, Option<&str>), String> {
    if let Some(rest) = address.strip_prefix('[') {
        let end = rest
            .find(']')
            .ok_or_else(|| "missing ']' in bracketed address".to_string())?;
        let host = &rest[..end];
        let after = &rest[end + 1..];
        if after.is_empty() {
            return Ok((host, None));
        }
        let port = after
            .strip_prefix(':')
            .ok_or_else(|| "unexpected characters after ']'".to_string())?;
        return Ok((host, Some(port)));
    }

    if address.parse::<Ipv6Addr>().is_ok() {
        return Ok((address, None));
    }

    match address.rsplit_once(':') {
        Some((host, _)) if host.contains(':') => Err("too many colons in address".to_string()),
        Some((host, port)) => Ok((host, Some(port))),
        None => Ok((address, None)),
    }
}

fn parse_port(port: &str) -> Result<u16, String> {
    if port.is_empty() {
        return Err("missing port after ':'".to_string());
    }
    if !port.chars().all(|c| c.is_ascii_digit()) {
        return Err(format!("port '{}' is not a number", port));
    }
    port.parse::<u16>()
        .map_err(|_| format!("port {} is out of range [0, 65535]", port))
}

pub fn validate_server_address(address: &str) -> Result<(), DomainError> {
    let invalid = |reason: String| DomainError::InvalidServerAddress {
        address: address.to_string(),
        reason,
    };

    if address.is_empty() {
        return Err(invalid("address cannot be empty".to_string()));
    }
    if address.parse::<IpAddr>().is_ok() {
        return Ok(());
    }

    let (host, port) = split_host_port(address).map_err(invalid)?;
    if let Some(port) = port {
        parse_port(port).map_err(invalid)?;
    }

    if address.starts_with('[') {
        return host
            .parse::<Ipv6Addr>()
            .map(|_| ())
            .map_err(|_| invalid(format!("'{}' is not an IPv6 address", host)));
    }

    if host.parse::<Ipv4Addr>().is_ok() {
        return Ok(());
    }

    validate_domain_name(host, DomainNameMode::Relaxed)
        .map_err(|_| invalid(format!("'{}' is neither an IP address nor a host name", host)))
}

/// True when `address` is an IP literal, with or without a port.
pub fn is_ip_literal(address: &str) -> bool {
    if address.parse::<IpAddr>().is_ok() {
        return true;
    }
    match split_host_port(address) {
        Ok((host, _)) if address.starts_with('[') => host.parse::<Ipv6Addr>().is_ok(),
        Ok((host, _)) => host.parse::<Ipv4Addr>().is_ok(),
        Err(_) => false,
    }
}

/// Appends `default_port` to addresses that do not carry one.
pub fn with_default_port(address: &str, default_port: u16) -> String {
    if address.parse::<Ipv6Addr>().is_ok() {
        return format!("[{}]:{}", address, default_port);
    }
    match split_host_port(address) {
        Ok((_, Some(_))) => address.to_string(),
        Ok((host, None)) if address.starts_with('[') => format!("[{}]:{}", host, default_port),
        _ => format!("{}:{}", address, default_port),
    }
}
