use crate::syntax::{
    validate_domain_name, validate_server_address, with_default_port, DomainNameMode,
    DEFAULT_DNS_PORT,
};
use crate::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_PROBE_INTERVAL: Duration = Duration::from_secs(5);

/// Upper bound for a single probe query, whatever the interval.
pub const MAX_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Record types a probe may ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ProbeRecordType {
    A,
    AAAA,
    #[default]
    ANY,
    SRV,
}

impl ProbeRecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProbeRecordType::A => "A",
            ProbeRecordType::AAAA => "AAAA",
            ProbeRecordType::ANY => "ANY",
            ProbeRecordType::SRV => "SRV",
        }
    }

    pub fn to_u16(&self) -> u16 {
        match self {
            ProbeRecordType::A => 1,
            ProbeRecordType::AAAA => 28,
            ProbeRecordType::SRV => 33,
            ProbeRecordType::ANY => 255,
        }
    }
}

impl FromStr for ProbeRecordType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(ProbeRecordType::A),
            "AAAA" => Ok(ProbeRecordType::AAAA),
            "ANY" => Ok(ProbeRecordType::ANY),
            "SRV" => Ok(ProbeRecordType::SRV),
            other => Err(DomainError::UnsupportedRecordType(other.to_string())),
        }
    }
}

impl fmt::Display for ProbeRecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One configured DNS probe.
///
/// Parsed from `<label>,<server>,<name>[,<interval_seconds>][,<type>]`, e.g.
/// `mydns,127.0.0.1:53,example.com,10,A`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsProbeOption {
    /// Unique, `^[a-zA-Z0-9_]+$`; used as the health check path suffix.
    pub label: String,
    /// Always `host:port`.
    pub server: String,
    /// Always fully qualified (trailing dot).
    pub name: String,
    pub interval: Duration,
    pub record_type: ProbeRecordType,
}

pub fn validate_probe_label(label: &str) -> Result<(), DomainError> {
    if label.is_empty() || !label.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(DomainError::InvalidProbeLabel(label.to_string()));
    }
    Ok(())
}

impl DnsProbeOption {
    /// Query timeout for this probe: strictly shorter than the interval so
    /// a slow server can never back up ticks.
    pub fn timeout(&self) -> Duration {
        probe_timeout(self.interval)
    }
}

pub fn probe_timeout(interval: Duration) -> Duration {
    interval.mul_f64(0.8).min(MAX_PROBE_TIMEOUT)
}

impl FromStr for DnsProbeOption {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = value.split(',').collect();
        if !(3..=5).contains(&fields.len()) {
            return Err(DomainError::InvalidProbeFormat(format!(
                "expected <label>,<server>,<dns name>[,<interval_seconds>][,<type>], got '{}'",
                value
            )));
        }

        let label = fields[0];
        validate_probe_label(label)?;

        validate_server_address(fields[1])?;
        let server = with_default_port(fields[1], DEFAULT_DNS_PORT);

        validate_domain_name(fields[2], DomainNameMode::Relaxed)?;
        let name = if fields[2].ends_with('.') {
            fields[2].to_string()
        } else {
            format!("{}.", fields[2])
        };

        let interval = match fields.get(3) {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(DomainError::InvalidProbeInterval(raw.to_string())),
            },
            None => DEFAULT_PROBE_INTERVAL,
        };

        let record_type = match fields.get(4) {
            Some(raw) => raw.parse()?,
            None => ProbeRecordType::default(),
        };

        Ok(Self {
            label: label.to_string(),
            server,
            name,
            interval,
            record_type,
        })
    }
}

/// Accumulates probe options, rejecting a repeated label as soon as it is
/// pushed.
#[derive(Debug, Default)]
pub struct ProbeOptionsBuilder {
    probes: Vec<DnsProbeOption>,
    labels: HashSet<String>,
}

impl ProbeOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, option: DnsProbeOption) -> Result<(), DomainError> {
        if !self.labels.insert(option.label.clone()) {
            return Err(DomainError::DuplicateProbeLabel(option.label));
        }
        self.probes.push(option);
        Ok(())
    }

    pub fn push_str(&mut self, value: &str) -> Result<(), DomainError> {
        self.push(value.parse()?)
    }

    pub fn len(&self) -> usize {
        self.probes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probes.is_empty()
    }

    pub fn build(self) -> Vec<DnsProbeOption> {
        self.probes
    }
}
