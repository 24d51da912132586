//! Ferrous Sidecar Infrastructure Layer
pub mod dns;
pub mod dnsmasq;
pub mod metrics;
