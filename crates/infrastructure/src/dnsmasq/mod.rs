pub mod stats_client;

pub use stats_client::DnsmasqStatsClient;
